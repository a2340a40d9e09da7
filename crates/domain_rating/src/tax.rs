//! State premium tax table
//!
//! A plain immutable lookup from two-letter state code to premium tax rate
//! with an explicit default for unmapped states. States with a legislated
//! zero insurance-premium tax are listed with an exact zero entry so they
//! never fall through to the default.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use rust_decimal_macros::dec;

use rating_kernel::Rate;

/// Rate applied when the customer's state is unknown or unmapped
pub fn default_tax_rate() -> Rate {
    Rate::from_percentage(dec!(4.0))
}

static STATE_TAX_RATES: Lazy<HashMap<&'static str, Rate>> = Lazy::new(|| {
    let mut rates = HashMap::new();

    rates.insert("CA", Rate::from_percentage(dec!(2.35)));
    rates.insert("NY", Rate::from_percentage(dec!(1.80)));
    rates.insert("TX", Rate::from_percentage(dec!(1.60)));
    rates.insert("FL", Rate::from_percentage(dec!(1.75)));
    rates.insert("WA", Rate::from_percentage(dec!(2.00)));
    rates.insert("IL", Rate::from_percentage(dec!(0.50)));
    rates.insert("PA", Rate::from_percentage(dec!(2.00)));
    rates.insert("NJ", Rate::from_percentage(dec!(1.05)));

    // No insurance premium tax by statute; must be exactly zero, never the
    // default.
    rates.insert("OR", Rate::zero());
    rates.insert("NH", Rate::zero());
    rates.insert("MT", Rate::zero());
    rates.insert("DE", Rate::zero());

    rates
});

/// Two-letter codes of the zero-premium-tax states
pub fn zero_tax_states() -> Vec<&'static str> {
    let mut states: Vec<_> = STATE_TAX_RATES
        .iter()
        .filter(|(_, rate)| rate.is_zero())
        .map(|(state, _)| *state)
        .collect();
    states.sort_unstable();
    states
}

/// Looks up the premium tax rate for a customer state
///
/// State codes are matched case-insensitively; `None` and unmapped states
/// get the default rate.
pub fn premium_tax_rate(state: Option<&str>) -> Rate {
    match state {
        Some(s) => {
            let code = s.trim().to_ascii_uppercase();
            STATE_TAX_RATES
                .get(code.as_str())
                .copied()
                .unwrap_or_else(default_tax_rate)
        }
        None => default_tax_rate(),
    }
}
