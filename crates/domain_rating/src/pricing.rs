//! Per-product pricing functions
//!
//! Each product has its own hand-written, table-driven formula: an annual
//! base rate looked up from the selected deductible tier, adjusted for any
//! product-specific scope multiplier, then multiplied by the term in years.
//! There is deliberately no generic formula and no dispatch hierarchy -
//! real rating tables are not interchangeable across products, so adding a
//! product means writing one function and registering one entry below.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use rating_kernel::Money;

use crate::error::RatingError;
use crate::selections::CoverageSelections;

/// A deterministic pricing formula for one product
pub type PricingFn = fn(&CoverageSelections) -> Result<Money, RatingError>;

static PRICING_REGISTRY: Lazy<HashMap<&'static str, PricingFn>> = Lazy::new(|| {
    let mut registry: HashMap<&'static str, PricingFn> = HashMap::new();
    registry.insert("hero-auto-advantage", price_auto_advantage);
    registry.insert("hero-auto-essential", price_auto_essential);
    registry.insert("hero-home-advantage", price_home_advantage);
    registry.insert("hero-home-essential", price_home_essential);
    registry
});

/// Looks up the pricing function registered for a product id
pub fn pricing_fn(product_id: &str) -> Option<PricingFn> {
    PRICING_REGISTRY.get(product_id).copied()
}

/// Product ids with a registered pricing function
pub fn priced_product_ids() -> Vec<&'static str> {
    let mut ids: Vec<_> = PRICING_REGISTRY.keys().copied().collect();
    ids.sort_unstable();
    ids
}

/// Annual rate 200/yr at the $500 tier, 150/yr at $1000; household-wide
/// "Multi VIN Unlimited" scope surcharges the annual rate by 1.5x before
/// term multiplication.
fn price_auto_advantage(selections: &CoverageSelections) -> Result<Money, RatingError> {
    const PRODUCT_ID: &str = "hero-auto-advantage";

    let deductible = require(selections, PRODUCT_ID, "Deductible Coverage")?;
    let annual_rate = match deductible.as_str() {
        "$500" => dec!(200),
        "$1000" => dec!(150),
        other => return Err(RatingError::invalid_selection("Deductible Coverage", other)),
    };

    let scope = require(selections, PRODUCT_ID, "Vehicle Scope")?;
    let scope_multiplier = match scope.as_str() {
        "Single VIN" => dec!(1.0),
        "Multi VIN Unlimited" => dec!(1.5),
        other => return Err(RatingError::invalid_selection("Vehicle Scope", other)),
    };

    let term = term_years(selections, PRODUCT_ID)?;
    Ok(Money::new(annual_rate * scope_multiplier * term))
}

/// Single tier, single VIN: flat 100/yr.
fn price_auto_essential(selections: &CoverageSelections) -> Result<Money, RatingError> {
    const PRODUCT_ID: &str = "hero-auto-essential";

    let deductible = require(selections, PRODUCT_ID, "Deductible Coverage")?;
    if deductible != "$500" {
        return Err(RatingError::invalid_selection(
            "Deductible Coverage",
            deductible,
        ));
    }

    let term = term_years(selections, PRODUCT_ID)?;
    Ok(Money::new(dec!(100) * term))
}

/// 425/yr at the $75 tier, 350/yr at $125; extending the repair benefit to
/// home systems surcharges the annual rate by 1.25x.
fn price_home_advantage(selections: &CoverageSelections) -> Result<Money, RatingError> {
    const PRODUCT_ID: &str = "hero-home-advantage";

    let deductible = require(selections, PRODUCT_ID, "Deductible Coverage")?;
    let annual_rate = match deductible.as_str() {
        "$75" => dec!(425),
        "$125" => dec!(350),
        other => return Err(RatingError::invalid_selection("Deductible Coverage", other)),
    };

    let systems = require(selections, PRODUCT_ID, "System Coverage")?;
    let systems_multiplier = match systems.as_str() {
        "Appliances Only" => dec!(1.0),
        "Appliances + Systems" => dec!(1.25),
        other => return Err(RatingError::invalid_selection("System Coverage", other)),
    };

    let term = term_years(selections, PRODUCT_ID)?;
    Ok(Money::new(annual_rate * systems_multiplier * term))
}

/// Flat 300/yr at the single $100 tier.
fn price_home_essential(selections: &CoverageSelections) -> Result<Money, RatingError> {
    const PRODUCT_ID: &str = "hero-home-essential";

    let deductible = require(selections, PRODUCT_ID, "Deductible Coverage")?;
    if deductible != "$100" {
        return Err(RatingError::invalid_selection(
            "Deductible Coverage",
            deductible,
        ));
    }

    let term = term_years(selections, PRODUCT_ID)?;
    Ok(Money::new(dec!(300) * term))
}

/// Resolves a selection the formula cannot price without
fn require(
    selections: &CoverageSelections,
    product_id: &str,
    option: &str,
) -> Result<String, RatingError> {
    selections
        .resolve(option)
        .ok_or_else(|| RatingError::missing_selection(product_id, option))
}

/// Resolves and parses the contract term in years
fn term_years(selections: &CoverageSelections, product_id: &str) -> Result<Decimal, RatingError> {
    let raw = require(selections, product_id, "Term Years")?;
    let years: u32 = raw
        .parse()
        .map_err(|_| RatingError::invalid_selection("Term Years", raw.clone()))?;
    Ok(Decimal::from(years))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn selections(pairs: &[(&str, &str)]) -> CoverageSelections {
        let mut s = CoverageSelections::new();
        for (k, v) in pairs {
            s.insert(*k, json!(v));
        }
        s
    }

    #[test]
    fn test_every_product_is_registered() {
        assert_eq!(
            priced_product_ids(),
            vec![
                "hero-auto-advantage",
                "hero-auto-essential",
                "hero-home-advantage",
                "hero-home-essential",
            ]
        );
        assert!(pricing_fn("not-a-real-id").is_none());
    }

    #[test]
    fn test_auto_advantage_single_vin() {
        let price = price_auto_advantage(&selections(&[
            ("deductibleCoverage", "$1000"),
            ("termYears", "2"),
            ("vehicleScope", "Single VIN"),
        ]))
        .unwrap();

        assert_eq!(price.amount(), dec!(300));
    }

    #[test]
    fn test_auto_advantage_multi_vin_surcharge_precedes_term() {
        let price = price_auto_advantage(&selections(&[
            ("deductibleCoverage", "$1000"),
            ("termYears", "2"),
            ("vehicleScope", "Multi VIN Unlimited"),
        ]))
        .unwrap();

        // 150 * 1.5 * 2
        assert_eq!(price.amount(), dec!(450));
    }

    #[test]
    fn test_auto_advantage_lower_deductible_costs_more() {
        let cheaper = price_auto_advantage(&selections(&[
            ("deductibleCoverage", "$1000"),
            ("termYears", "1"),
            ("vehicleScope", "Single VIN"),
        ]))
        .unwrap();
        let dearer = price_auto_advantage(&selections(&[
            ("deductibleCoverage", "$500"),
            ("termYears", "1"),
            ("vehicleScope", "Single VIN"),
        ]))
        .unwrap();

        assert!(dearer > cheaper);
        assert_eq!(dearer.amount(), dec!(200));
    }

    #[test]
    fn test_missing_selection_error() {
        let err = price_auto_advantage(&selections(&[("termYears", "2")])).unwrap_err();
        assert_eq!(
            err,
            RatingError::missing_selection("hero-auto-advantage", "Deductible Coverage")
        );
    }

    #[test]
    fn test_unparseable_term_error() {
        let err = price_home_essential(&selections(&[
            ("deductibleCoverage", "$100"),
            ("termYears", "two"),
        ]))
        .unwrap_err();
        assert_eq!(err, RatingError::invalid_selection("Term Years", "two"));
    }

    #[test]
    fn test_home_advantage_systems_multiplier() {
        let price = price_home_advantage(&selections(&[
            ("deductibleCoverage", "$125"),
            ("termYears", "3"),
            ("systemCoverage", "Appliances + Systems"),
        ]))
        .unwrap();

        // 350 * 1.25 * 3
        assert_eq!(price.amount(), dec!(1312.5));
    }

    #[test]
    fn test_home_essential_flat_rate() {
        let price = price_home_essential(&selections(&[
            ("deductibleCoverage", "$100"),
            ("termYears", "3"),
        ]))
        .unwrap();

        assert_eq!(price.amount(), dec!(900));
    }
}
