//! The premium breakdown returned to callers

use serde::{Deserialize, Serialize};

use domain_catalog::ProductDefinition;
use rating_kernel::Money;

use crate::factors::RatingFactors;

/// The full output of one rating call
///
/// Carries the resolved product definition so callers render a quote
/// without a second catalog lookup. Serializes in the camelCase shape the
/// web layer returns verbatim as the quote response body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PremiumBreakdown {
    /// Base rate x term, already adjusted by `factors.total_factor`
    pub base_premium: Money,
    /// State premium tax on the base, rounded to cents
    pub taxes: Money,
    /// Flat policy fee plus capped processing fee, rounded to cents
    pub fees: Money,
    /// `base_premium + taxes + fees`, summed from the already-rounded
    /// components
    pub total_premium: Money,
    /// The factor set used for this quote
    pub factors: RatingFactors,
    /// The resolved product definition
    pub product_details: ProductDefinition,
}
