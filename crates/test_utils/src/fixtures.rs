//! Known-valid selection fixtures per catalog product

use domain_rating::CoverageSelections;

use crate::builders::SelectionsBuilder;

/// Complete selections for `hero-auto-advantage` at the $1000 tier,
/// two-year term, single vehicle
pub fn auto_advantage_selections() -> CoverageSelections {
    SelectionsBuilder::new()
        .with("deductibleCoverage", "$1000")
        .with("termYears", "2")
        .with("vehicleScope", "Single VIN")
        .build()
}

/// Complete selections for `hero-auto-essential`
pub fn auto_essential_selections() -> CoverageSelections {
    SelectionsBuilder::new()
        .with("deductibleCoverage", "$500")
        .with("termYears", "1")
        .build()
}

/// Complete selections for `hero-home-advantage` with the systems rider
pub fn home_advantage_selections() -> CoverageSelections {
    SelectionsBuilder::new()
        .with("deductibleCoverage", "$125")
        .with("termYears", "2")
        .with("systemCoverage", "Appliances + Systems")
        .build()
}

/// Complete selections for `hero-home-essential`
pub fn home_essential_selections() -> CoverageSelections {
    SelectionsBuilder::new()
        .with("deductibleCoverage", "$100")
        .with("termYears", "1")
        .build()
}
