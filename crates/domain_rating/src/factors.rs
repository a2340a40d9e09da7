//! Rating factors
//!
//! Multiplicative adjustments applied to the base premium. Factors are
//! computed fresh per quote from the inputs given, multiply together into
//! `total_factor`, and are never clamped - the factor sets are small and
//! bounded in practice.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use domain_catalog::ProductDefinition;

use crate::service::{CustomerData, VehicleData};

/// States that carry a premium surcharge
const HIGH_COST_STATES: &[&str] = &["CA", "NY", "NJ", "FL"];

/// States that carry a premium discount
const LOW_COST_STATES: &[&str] = &["WY", "ID", "MT", "SD"];

/// The multiplicative adjustments used for one quote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingFactors {
    pub vehicle_factor: Decimal,
    pub location_factor: Decimal,
    pub age_factor: Decimal,
    /// Always `vehicle_factor * location_factor * age_factor`
    pub total_factor: Decimal,
}

impl RatingFactors {
    /// All-neutral factors (the result when no vehicle or customer data is
    /// supplied)
    pub fn neutral() -> Self {
        Self {
            vehicle_factor: dec!(1.0),
            location_factor: dec!(1.0),
            age_factor: dec!(1.0),
            total_factor: dec!(1.0),
        }
    }

    /// Computes the factor set for a quote
    ///
    /// `rating_year` anchors vehicle-age math so the same inputs always
    /// produce the same factors.
    pub fn compute(
        product: &ProductDefinition,
        vehicle: Option<&VehicleData>,
        customer: Option<&CustomerData>,
        rating_year: i32,
    ) -> Self {
        let vehicle_factor = vehicle_factor(product, vehicle, rating_year);
        let location_factor = location_factor(
            customer
                .and_then(|c| c.address.as_ref())
                .and_then(|a| a.state.as_deref()),
        );
        // Reserved axis: the quote contract carries no customer date of
        // birth today, so age rates neutral.
        let age_factor = dec!(1.0);

        Self {
            vehicle_factor,
            location_factor,
            age_factor,
            total_factor: vehicle_factor * location_factor * age_factor,
        }
    }
}

/// Vehicle-age factor
///
/// Only products carrying the repair-benefit rider are vehicle-age rated:
/// a vehicle older than the rider's eligibility threshold surcharges the
/// premium because the rider lapses into reimbursement-only handling.
/// Everything else, including quotes with no vehicle data, rates neutral.
pub fn vehicle_factor(
    product: &ProductDefinition,
    vehicle: Option<&VehicleData>,
    rating_year: i32,
) -> Decimal {
    let max_age = match product.repair_benefit_max_vehicle_age {
        Some(max_age) => max_age,
        None => return dec!(1.0),
    };
    let model_year = match vehicle.and_then(|v| v.year) {
        Some(year) => year,
        None => return dec!(1.0),
    };

    // Next-model-year vehicles rate as age zero
    let age = (rating_year - model_year).max(0) as u32;
    if age > max_age {
        dec!(1.2)
    } else {
        dec!(1.0)
    }
}

/// Location factor from the customer's state, matched case-insensitively
pub fn location_factor(state: Option<&str>) -> Decimal {
    let state = match state {
        Some(s) => s.trim().to_ascii_uppercase(),
        None => return dec!(1.0),
    };

    if HIGH_COST_STATES.contains(&state.as_str()) {
        dec!(1.1)
    } else if LOW_COST_STATES.contains(&state.as_str()) {
        dec!(0.95)
    } else {
        dec!(1.0)
    }
}
