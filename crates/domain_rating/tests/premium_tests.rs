//! Premium Calculation Tests
//!
//! End-to-end coverage of `RatingService::calculate_premium`:
//! - Worked examples pinned to historical quote values
//! - Scope and term multipliers
//! - Rating factors (vehicle age, location)
//! - Tax table behavior including tax-exempt states
//! - Fee schedule including the processing-fee cap
//! - The component rounding/summation ordering

use rust_decimal_macros::dec;

use domain_rating::{CoverageSelections, RatingFactors, RatingService};
use test_utils::{
    auto_advantage_selections, home_advantage_selections, CustomerBuilder, SelectionsBuilder,
    VehicleBuilder,
};

fn service() -> RatingService {
    RatingService::with_rating_year(2025)
}

// ============================================================================
// WORKED EXAMPLES
// ============================================================================

mod worked_examples {
    use super::*;

    /// $1000 deductible, 2-year term, single VIN, no vehicle/customer data:
    /// 150/yr x 2 = 300 base, 4% default tax, 15 + 1.5% fees.
    #[test]
    fn test_auto_advantage_baseline_quote() {
        let breakdown = service()
            .calculate_premium("hero-auto-advantage", &auto_advantage_selections(), None, None)
            .unwrap();

        assert_eq!(breakdown.base_premium.amount(), dec!(300));
        assert_eq!(breakdown.taxes.amount(), dec!(12.00));
        assert_eq!(breakdown.fees.amount(), dec!(19.50));
        assert_eq!(breakdown.total_premium.amount(), dec!(331.50));
        assert_eq!(breakdown.factors, RatingFactors::neutral());
    }

    /// Multi VIN Unlimited applies the 1.5x scope surcharge to the annual
    /// rate before term multiplication: 150 x 1.5 x 2 = 450.
    #[test]
    fn test_auto_advantage_multi_vin_quote() {
        let selections = SelectionsBuilder::new()
            .with("deductibleCoverage", "$1000")
            .with("termYears", "2")
            .with("vehicleScope", "Multi VIN Unlimited")
            .build();

        let breakdown = service()
            .calculate_premium("hero-auto-advantage", &selections, None, None)
            .unwrap();

        assert_eq!(breakdown.base_premium.amount(), dec!(450));
    }

    #[test]
    fn test_home_advantage_quote() {
        // 350/yr x 1.25 systems x 2 years = 875
        let breakdown = service()
            .calculate_premium("hero-home-advantage", &home_advantage_selections(), None, None)
            .unwrap();

        assert_eq!(breakdown.base_premium.amount(), dec!(875));
        // 875 * 0.04 = 35.00; 15 + min(13.125, 25) = 28.13
        assert_eq!(breakdown.taxes.amount(), dec!(35.00));
        assert_eq!(breakdown.fees.amount(), dec!(28.13));
        assert_eq!(breakdown.total_premium.amount(), dec!(938.13));
    }
}

// ============================================================================
// RATING FACTORS
// ============================================================================

mod factor_tests {
    use super::*;

    #[test]
    fn test_location_surcharge_state() {
        let customer = CustomerBuilder::new().state("ca").build();
        let breakdown = service()
            .calculate_premium(
                "hero-auto-advantage",
                &auto_advantage_selections(),
                None,
                Some(&customer),
            )
            .unwrap();

        assert_eq!(breakdown.factors.location_factor, dec!(1.1));
        // 300 x 1.1, taxed at the CA rate of 2.35%
        assert_eq!(breakdown.base_premium.amount(), dec!(330.0));
        assert_eq!(breakdown.taxes.amount(), dec!(7.76));
    }

    #[test]
    fn test_location_discount_state() {
        let customer = CustomerBuilder::new().state("wy").build();
        let breakdown = service()
            .calculate_premium(
                "hero-auto-advantage",
                &auto_advantage_selections(),
                None,
                Some(&customer),
            )
            .unwrap();

        assert_eq!(breakdown.factors.location_factor, dec!(0.95));
        assert_eq!(breakdown.base_premium.amount(), dec!(285.0));
    }

    #[test]
    fn test_location_neutral_state() {
        let customer = CustomerBuilder::new().state("tx").build();
        let breakdown = service()
            .calculate_premium(
                "hero-auto-advantage",
                &auto_advantage_selections(),
                None,
                Some(&customer),
            )
            .unwrap();

        assert_eq!(breakdown.factors.location_factor, dec!(1.0));
        assert_eq!(breakdown.base_premium.amount(), dec!(300));
    }

    #[test]
    fn test_old_vehicle_surcharge_on_repair_benefit_product() {
        let vehicle = VehicleBuilder::new().model_year(2012).build();
        let breakdown = service()
            .calculate_premium(
                "hero-auto-advantage",
                &auto_advantage_selections(),
                Some(&vehicle),
                None,
            )
            .unwrap();

        assert_eq!(breakdown.factors.vehicle_factor, dec!(1.2));
        assert_eq!(breakdown.base_premium.amount(), dec!(360.0));
    }

    #[test]
    fn test_factors_combine_multiplicatively() {
        let vehicle = VehicleBuilder::new().model_year(2012).build();
        let customer = CustomerBuilder::new().state("CA").build();
        let breakdown = service()
            .calculate_premium(
                "hero-auto-advantage",
                &auto_advantage_selections(),
                Some(&vehicle),
                Some(&customer),
            )
            .unwrap();

        assert_eq!(breakdown.factors.total_factor, dec!(1.2) * dec!(1.1));
        // 300 x 1.32
        assert_eq!(breakdown.base_premium.amount(), dec!(396.0));
    }

    #[test]
    fn test_rating_year_anchors_vehicle_age() {
        let vehicle = VehicleBuilder::new().model_year(2012).build();
        let selections = auto_advantage_selections();

        // 2012 vehicle is 10 years old in 2022 (inside threshold), 13 in 2025
        let young = RatingService::with_rating_year(2022)
            .calculate_premium("hero-auto-advantage", &selections, Some(&vehicle), None)
            .unwrap();
        let old = RatingService::with_rating_year(2025)
            .calculate_premium("hero-auto-advantage", &selections, Some(&vehicle), None)
            .unwrap();

        assert_eq!(young.factors.vehicle_factor, dec!(1.0));
        assert_eq!(old.factors.vehicle_factor, dec!(1.2));
    }
}

// ============================================================================
// TAXES
// ============================================================================

mod tax_tests {
    use super::*;

    #[test]
    fn test_tax_exempt_states_pay_exactly_zero() {
        for state in ["OR", "NH", "MT", "DE", "or", "nh"] {
            let customer = CustomerBuilder::new().state(state).build();
            let breakdown = service()
                .calculate_premium(
                    "hero-home-advantage",
                    &home_advantage_selections(),
                    None,
                    Some(&customer),
                )
                .unwrap();

            assert!(
                breakdown.taxes.is_zero(),
                "state {state} should be tax exempt, got {}",
                breakdown.taxes
            );
        }
    }

    #[test]
    fn test_unmapped_state_uses_default_rate() {
        let customer = CustomerBuilder::new().state("OH").build();
        let breakdown = service()
            .calculate_premium(
                "hero-auto-advantage",
                &auto_advantage_selections(),
                None,
                Some(&customer),
            )
            .unwrap();

        // Same as the no-customer default: 300 * 4%
        assert_eq!(breakdown.taxes.amount(), dec!(12.00));
    }
}

// ============================================================================
// FEES
// ============================================================================

mod fee_tests {
    use super::*;

    /// The processing component never exceeds its ceiling, however large
    /// the premium: fees <= policy fee + cap.
    #[test]
    fn test_processing_fee_cap_on_large_premium() {
        // Most expensive configuration: $75 tier x systems x 3 years in CA
        let selections = SelectionsBuilder::new()
            .with("deductibleCoverage", "$75")
            .with("termYears", "3")
            .with("systemCoverage", "Appliances + Systems")
            .build();
        let customer = CustomerBuilder::new().state("CA").build();

        let breakdown = service()
            .calculate_premium("hero-home-advantage", &selections, None, Some(&customer))
            .unwrap();

        // 425 x 1.25 x 3 x 1.1 = 1753.125; 1.5% of that far exceeds $25
        assert!(breakdown.base_premium.amount() > dec!(1000));
        assert_eq!(breakdown.fees.amount(), dec!(40.00));
    }
}

// ============================================================================
// ROUNDING AND TOTALS
// ============================================================================

mod rounding_tests {
    use super::*;

    /// Taxes and fees are each rounded to cents independently; the total is
    /// the exact sum of the already-rounded components.
    #[test]
    fn test_total_is_sum_of_rounded_components() {
        let vehicle = VehicleBuilder::new().model_year(2012).build();
        let customer = CustomerBuilder::new().state("CA").build();

        let breakdown = service()
            .calculate_premium(
                "hero-auto-advantage",
                &auto_advantage_selections(),
                Some(&vehicle),
                Some(&customer),
            )
            .unwrap();

        assert!(breakdown.taxes.is_whole_cents());
        assert!(breakdown.fees.is_whole_cents());
        assert_eq!(
            breakdown.total_premium,
            breakdown.base_premium + breakdown.taxes + breakdown.fees
        );
    }

    /// Fractional tax amounts round half away from zero.
    #[test]
    fn test_tax_rounding_half_away_from_zero() {
        // 330 * 2.35% = 7.755 -> 7.76
        let customer = CustomerBuilder::new().state("CA").build();
        let breakdown = service()
            .calculate_premium(
                "hero-auto-advantage",
                &auto_advantage_selections(),
                None,
                Some(&customer),
            )
            .unwrap();

        assert_eq!(breakdown.taxes.amount(), dec!(7.76));
    }
}

// ============================================================================
// FAILURE SEMANTICS
// ============================================================================

mod failure_tests {
    use super::*;
    use domain_rating::RatingError;

    #[test]
    fn test_unknown_product_id() {
        let err = service()
            .calculate_premium("hero-boat-advantage", &CoverageSelections::new(), None, None)
            .unwrap_err();

        assert!(matches!(err, RatingError::ProductNotFound(_)));
    }

    #[test]
    fn test_unvalidated_selections_fail_cleanly() {
        // Pricing is reached without prior validation; it must error, not
        // panic, on an incomplete selection set.
        let selections = SelectionsBuilder::new().with("termYears", "2").build();
        let err = service()
            .calculate_premium("hero-auto-advantage", &selections, None, None)
            .unwrap_err();

        assert!(matches!(err, RatingError::MissingSelection { .. }));
    }
}
