//! Product definition value objects
//!
//! These types describe what a Hero product *is*: its coverage axes,
//! marketing features, exclusions, and claims-process metadata. Nothing in
//! here prices anything - pricing is registered per product id in the
//! rating domain.

use serde::{Deserialize, Serialize};

/// Line of business a product belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductCategory {
    Auto,
    Home,
}

/// A named axis of choice a buyer must resolve before the product can be
/// priced (e.g. "Deductible Coverage" with options "$500" / "$1000")
///
/// The declared `options` list is exhaustive: a quote selection is valid
/// only if it matches one of these values exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageOption {
    /// Display name; also the canonical key selections are matched against
    pub name: String,
    /// Permitted values, in display order
    pub options: Vec<String>,
    /// Short explanation shown alongside the choice
    pub description: String,
}

impl CoverageOption {
    pub fn new(
        name: impl Into<String>,
        options: &[&str],
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            options: options.iter().map(|o| (*o).to_string()).collect(),
            description: description.into(),
        }
    }

    /// Returns true if `value` is one of the declared options
    pub fn permits(&self, value: &str) -> bool {
        self.options.iter().any(|o| o == value)
    }
}

/// How a policyholder files a claim on this product
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimsProcess {
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    /// Filing window, e.g. "Within 30 days of covered loss"
    pub time_limit: String,
    pub required_docs: Vec<String>,
}

/// An immutable, ratable product definition
///
/// The set of `id` values is fixed at compile time; callers address
/// products only by id and treat an unknown id as bad input, never as a
/// system fault.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDefinition {
    /// Unique key, e.g. `hero-auto-advantage`
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: ProductCategory,
    /// Ordered axes of choice a quote must resolve before pricing
    pub coverage_options: Vec<CoverageOption>,
    /// Marketing/coverage bullets; informational only, never priced
    pub features: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclusions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub claims_process: Option<ClaimsProcess>,
    /// Vehicle classes the product may attach to (auto products only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle_types: Option<Vec<String>>,
    /// Oldest vehicle age (in years) eligible for the repair-benefit rider.
    /// `None` means the product has no vehicle-age dependency and rates
    /// age-neutral.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repair_benefit_max_vehicle_age: Option<u32>,
}

impl ProductDefinition {
    /// Finds a coverage option by its display name
    pub fn coverage_option(&self, name: &str) -> Option<&CoverageOption> {
        self.coverage_options.iter().find(|o| o.name == name)
    }
}
