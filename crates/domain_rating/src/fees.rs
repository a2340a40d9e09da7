//! Policy and processing fees
//!
//! Every quote carries a flat policy fee plus a percentage-of-premium
//! processing fee capped at an absolute ceiling. Both are summed and
//! rounded to cents as one fee component of the breakdown.

use rust_decimal_macros::dec;

use rating_kernel::{Money, Rate};

/// The administrative charges layered on top of premium and tax
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeeSchedule {
    /// Flat per-policy fee
    pub policy_fee: Money,
    /// Processing fee as a fraction of the adjusted premium
    pub processing_rate: Rate,
    /// Absolute ceiling on the processing component
    pub processing_cap: Money,
}

impl FeeSchedule {
    /// The schedule in force for all Hero programs: $15 flat plus 1.5%
    /// capped at $25
    pub fn standard() -> Self {
        Self {
            policy_fee: Money::new(dec!(15.00)),
            processing_rate: Rate::from_percentage(dec!(1.5)),
            processing_cap: Money::new(dec!(25.00)),
        }
    }

    /// Total fees for a premium: `policy_fee + min(rate * premium, cap)`,
    /// rounded to cents
    pub fn total_for(&self, premium: Money) -> Money {
        let processing = self.processing_rate.apply(premium).min(self.processing_cap);
        (self.policy_fee + processing).round_to_cents()
    }
}
