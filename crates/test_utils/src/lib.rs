//! Test Utilities
//!
//! Shared builders and fixtures for the rating-core test suite. Builders
//! construct quote inputs piece by piece; fixtures supply the complete,
//! known-valid selection sets the catalog products expect.

pub mod builders;
pub mod fixtures;

pub use builders::{CustomerBuilder, SelectionsBuilder, VehicleBuilder};
pub use fixtures::{
    auto_advantage_selections, auto_essential_selections, home_advantage_selections,
    home_essential_selections,
};
