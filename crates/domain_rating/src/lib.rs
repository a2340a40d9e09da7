//! Premium Rating Domain
//!
//! The deterministic pricing core for Hero service-contract products:
//! validates caller-supplied coverage selections against the static
//! catalog, prices them through per-product rating tables, applies
//! multiplicative rating factors, and layers on state premium tax and
//! fees.
//!
//! # Control flow
//!
//! ```text
//! product id + selections
//!        |
//!   validate_coverage      (all problems reported together, never thrown)
//!        |
//!   calculate_premium
//!        |- pricing registry: base rate x scope x term
//!        |- rating factors:   vehicle age, location
//!        |- taxes:            state table, rounded to cents
//!        |- fees:             flat + capped percentage, rounded to cents
//!        v
//!   PremiumBreakdown
//! ```
//!
//! Purely computational: no I/O, no shared mutable state. The hosting web
//! layer owns request-level concurrency and quote persistence.
//!
//! # Example
//!
//! ```rust
//! use domain_rating::{CoverageSelections, RatingService};
//! use serde_json::json;
//!
//! let mut selections = CoverageSelections::new();
//! selections.insert("deductibleCoverage", json!("$1000"));
//! selections.insert("termYears", json!("2"));
//! selections.insert("vehicleScope", json!("Single VIN"));
//!
//! let service = RatingService::with_rating_year(2025);
//! let outcome = service.validate_coverage("hero-auto-advantage", &selections);
//! assert!(outcome.is_valid);
//!
//! let breakdown = service
//!     .calculate_premium("hero-auto-advantage", &selections, None, None)
//!     .unwrap();
//! assert_eq!(breakdown.total_premium.to_string(), "$331.50");
//! ```

pub mod breakdown;
pub mod error;
pub mod factors;
pub mod fees;
pub mod pricing;
pub mod selections;
pub mod service;
pub mod tax;
pub mod validation;

pub use breakdown::PremiumBreakdown;
pub use error::RatingError;
pub use factors::RatingFactors;
pub use fees::FeeSchedule;
pub use selections::CoverageSelections;
pub use service::{Address, CustomerData, RatingService, VehicleData};
pub use validation::ValidationOutcome;
