//! The rating service
//!
//! Turns `(product_id, selections, vehicle?, customer?)` into a
//! `PremiumBreakdown`, and validates selection sets before callers persist
//! a quote. Stateless apart from the rating year captured at construction,
//! so a service value can be shared freely across request handlers.

use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use domain_catalog::get_product;

use crate::breakdown::PremiumBreakdown;
use crate::error::RatingError;
use crate::factors::RatingFactors;
use crate::fees::FeeSchedule;
use crate::pricing::pricing_fn;
use crate::selections::CoverageSelections;
use crate::tax::premium_tax_rate;
use crate::validation::{validate_coverage, ValidationOutcome};

/// Vehicle attributes supplied with a quote request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VehicleData {
    /// Model year
    pub year: Option<i32>,
    pub make: Option<String>,
    pub model: Option<String>,
    pub mileage: Option<u32>,
}

/// Customer address; only `state` participates in rating
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Address {
    pub state: Option<String>,
    pub city: Option<String>,
    pub zip: Option<String>,
}

/// Customer attributes supplied with a quote request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomerData {
    pub address: Option<Address>,
}

impl CustomerData {
    /// Convenience constructor for a customer known only by state
    pub fn in_state(state: impl Into<String>) -> Self {
        Self {
            address: Some(Address {
                state: Some(state.into()),
                ..Address::default()
            }),
        }
    }
}

/// Deterministic premium calculator over the static product catalog
///
/// The rating year is fixed at construction so vehicle-age factors are a
/// pure function of the inputs: the same service value quoting the same
/// request always produces an identical breakdown.
#[derive(Debug, Clone, Copy)]
pub struct RatingService {
    rating_year: i32,
}

impl RatingService {
    /// Creates a service rating against the current calendar year
    pub fn new() -> Self {
        Self {
            rating_year: Utc::now().year(),
        }
    }

    /// Creates a service with a fixed rating year
    pub fn with_rating_year(rating_year: i32) -> Self {
        Self { rating_year }
    }

    /// The year vehicle ages are measured against
    pub fn rating_year(&self) -> i32 {
        self.rating_year
    }

    /// Validates a selection set against a product's declared coverage
    /// options
    ///
    /// Never fails: an unknown product id and every missing or
    /// out-of-range selection come back inside the outcome, one error per
    /// problem, so the caller can surface all of them at once.
    pub fn validate_coverage(
        &self,
        product_id: &str,
        selections: &CoverageSelections,
    ) -> ValidationOutcome {
        let outcome = validate_coverage(product_id, selections);
        if !outcome.is_valid {
            debug!(
                product_id,
                error_count = outcome.errors.len(),
                "coverage validation failed"
            );
        }
        outcome
    }

    /// Calculates the full premium breakdown for a quote
    ///
    /// # Errors
    ///
    /// `RatingError::ProductNotFound` when the id is not in the catalog -
    /// fatal to this call and not retryable with the same input. Selection
    /// problems that slip past validation surface as
    /// `MissingSelection`/`InvalidSelection` rather than panicking.
    pub fn calculate_premium(
        &self,
        product_id: &str,
        selections: &CoverageSelections,
        vehicle: Option<&VehicleData>,
        customer: Option<&CustomerData>,
    ) -> Result<PremiumBreakdown, RatingError> {
        let product = get_product(product_id).ok_or_else(|| {
            warn!(product_id, "quote requested for unknown product");
            RatingError::ProductNotFound(product_id.to_string())
        })?;

        let price = pricing_fn(product_id)
            .ok_or_else(|| RatingError::PricingUnavailable(product_id.to_string()))?;
        let base = price(selections)?;

        let factors = RatingFactors::compute(product, vehicle, customer, self.rating_year);
        let adjusted = base * factors.total_factor;

        let state = customer
            .and_then(|c| c.address.as_ref())
            .and_then(|a| a.state.as_deref());

        // Each monetary component is rounded to cents independently; the
        // total is the sum of the rounded components. Historical quotes
        // were issued under this ordering, so it must not change.
        let taxes = premium_tax_rate(state).apply(adjusted).round_to_cents();
        let fees = FeeSchedule::standard().total_for(adjusted);
        let total = adjusted + taxes + fees;

        debug!(
            product_id,
            base = %adjusted,
            taxes = %taxes,
            fees = %fees,
            total = %total,
            "premium calculated"
        );

        Ok(PremiumBreakdown {
            base_premium: adjusted,
            taxes,
            fees,
            total_premium: total,
            factors,
            product_details: product.clone(),
        })
    }

}

impl Default for RatingService {
    fn default() -> Self {
        Self::new()
    }
}
