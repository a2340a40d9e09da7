//! Rating domain errors
//!
//! Only structural problems are errors here. Missing or out-of-range
//! coverage selections discovered during validation come back as a
//! `ValidationOutcome`, never as an `Err`, so the caller can show every
//! correctable problem to the end user at once.

use thiserror::Error;

/// Errors that can occur while rating a quote
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RatingError {
    /// The supplied product id does not exist in the catalog.
    ///
    /// Fatal to the call: retrying with the same id will always fail, only
    /// a corrected product id can succeed.
    #[error("Invalid product ID: {0}")]
    ProductNotFound(String),

    /// A catalog product has no registered pricing function.
    ///
    /// Indicates a deployment mismatch between catalog and pricing
    /// registry, not bad caller input.
    #[error("No pricing registered for product: {0}")]
    PricingUnavailable(String),

    /// A selection the pricing formula needs was not supplied
    #[error("Missing coverage selection '{option}' for product {product_id}")]
    MissingSelection { product_id: String, option: String },

    /// A supplied selection value is outside the product's declared set
    #[error("Invalid value '{value}' for coverage selection '{option}'")]
    InvalidSelection { option: String, value: String },
}

impl RatingError {
    /// Creates a missing-selection error
    pub fn missing_selection(product_id: impl Into<String>, option: impl Into<String>) -> Self {
        RatingError::MissingSelection {
            product_id: product_id.into(),
            option: option.into(),
        }
    }

    /// Creates an invalid-selection error
    pub fn invalid_selection(option: impl Into<String>, value: impl Into<String>) -> Self {
        RatingError::InvalidSelection {
            option: option.into(),
            value: value.into(),
        }
    }
}
