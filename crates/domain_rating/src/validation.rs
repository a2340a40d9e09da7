//! Coverage selection validation
//!
//! Validation never returns `Err`: every problem with a selection set is a
//! correctable client mistake, so all of them are collected into a single
//! outcome that the web layer can hand straight back to the form
//! (HTTP 400 with the full error list). The only structural case, an
//! unknown product id, is reported as a single error in the same shape.

use serde::{Deserialize, Serialize};

use domain_catalog::{get_product, ProductDefinition};

use crate::selections::CoverageSelections;

/// Result of validating a selection set against a product's declared axes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationOutcome {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

impl ValidationOutcome {
    /// Builds an outcome from collected errors; valid iff none
    pub fn from_errors(errors: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    /// The single-error outcome for an unrecognized product id
    pub fn invalid_product() -> Self {
        Self::from_errors(vec!["Invalid product ID".to_string()])
    }
}

/// Validates a selection set against the product's coverage options
///
/// One error is produced per missing axis and per out-of-range value, so a
/// form with three problems reports all three at once. Extra keys that
/// match no declared option are ignored.
pub fn validate_coverage(product_id: &str, selections: &CoverageSelections) -> ValidationOutcome {
    match get_product(product_id) {
        Some(product) => validate_against(product, selections),
        None => ValidationOutcome::invalid_product(),
    }
}

fn validate_against(
    product: &ProductDefinition,
    selections: &CoverageSelections,
) -> ValidationOutcome {
    let mut errors = Vec::new();

    for option in &product.coverage_options {
        match selections.resolve(&option.name) {
            None => errors.push(format!(
                "Missing required coverage selection '{}'",
                option.name
            )),
            Some(value) if !option.permits(&value) => errors.push(format!(
                "Invalid value '{}' for coverage selection '{}'; permitted: {}",
                value,
                option.name,
                option.options.join(", ")
            )),
            Some(_) => {}
        }
    }

    ValidationOutcome::from_errors(errors)
}
