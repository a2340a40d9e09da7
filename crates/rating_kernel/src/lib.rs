//! Rating Kernel - Foundational value types for the Hero rating core
//!
//! This crate provides the building blocks shared by the catalog and rating
//! domains:
//! - Money with precise decimal arithmetic and cent rounding
//! - Rate for percentage-based charges (taxes, processing fees)
//!
//! Everything here is a plain value object: no I/O, no clocks, no global
//! state. All Hero programs are written in USD, so Money carries no currency
//! dimension.

pub mod money;

pub use money::{Money, MoneyError, Rate};
