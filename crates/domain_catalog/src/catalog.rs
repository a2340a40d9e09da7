//! The compiled-in Hero product catalog
//!
//! Four products ship today: two auto VSC tiers and two home tiers. Each
//! entry is built once on first access and held in a read-only map for the
//! life of the process.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;

use crate::product::{ClaimsProcess, CoverageOption, ProductCategory, ProductDefinition};

static CATALOG: Lazy<BTreeMap<&'static str, ProductDefinition>> = Lazy::new(|| {
    let mut products = BTreeMap::new();
    for product in [
        hero_auto_advantage(),
        hero_auto_essential(),
        hero_home_advantage(),
        hero_home_essential(),
    ] {
        // Leak the id so the map key borrows catalog data, not a temporary
        let id: &'static str = Box::leak(product.id.clone().into_boxed_str());
        products.insert(id, product);
    }
    products
});

/// Pure lookup of a product definition by id
///
/// Returns `None` for an unrecognized id. That is a client error (bad
/// input), not a system fault - callers surface it directly and must not
/// retry with the same id.
pub fn get_product(product_id: &str) -> Option<&'static ProductDefinition> {
    CATALOG.get(product_id)
}

/// The full id -> definition mapping, for catalog rendering
///
/// Filtering and pagination belong to the caller, not here.
pub fn list_products() -> &'static BTreeMap<&'static str, ProductDefinition> {
    &CATALOG
}

/// All ratable product ids, in stable (sorted) order
pub fn product_ids() -> Vec<&'static str> {
    CATALOG.keys().copied().collect()
}

fn auto_claims_process() -> ClaimsProcess {
    ClaimsProcess {
        phone: "1-800-435-4376".to_string(),
        website: Some("https://claims.heroprotection.com".to_string()),
        time_limit: "Within 30 days of the covered repair".to_string(),
        required_docs: vec![
            "Repair order or invoice".to_string(),
            "Proof of deductible payment".to_string(),
            "Primary insurance declaration page".to_string(),
        ],
    }
}

fn hero_auto_advantage() -> ProductDefinition {
    ProductDefinition {
        id: "hero-auto-advantage".to_string(),
        name: "Hero Auto Advantage".to_string(),
        description: "Deductible reimbursement vehicle service contract with \
                      repair benefit rider for qualifying vehicles."
            .to_string(),
        category: ProductCategory::Auto,
        coverage_options: vec![
            CoverageOption::new(
                "Deductible Coverage",
                &["$500", "$1000"],
                "Deductible amount reimbursed per covered claim",
            ),
            CoverageOption::new(
                "Term Years",
                &["1", "2", "3"],
                "Contract length in years",
            ),
            CoverageOption::new(
                "Vehicle Scope",
                &["Single VIN", "Multi VIN Unlimited"],
                "Cover one registered vehicle or every vehicle in the household",
            ),
        ],
        features: vec![
            "Deductible reimbursement on comprehensive and collision claims".to_string(),
            "Repair benefit up to $500 per mechanical breakdown".to_string(),
            "No mileage limit during the contract term".to_string(),
            "Transferable once to a private-party buyer".to_string(),
        ],
        exclusions: Some(vec![
            "Claims denied by the primary insurance carrier".to_string(),
            "Commercial, livery, or rideshare use".to_string(),
            "Vehicles with a branded or salvage title".to_string(),
        ]),
        claims_process: Some(auto_claims_process()),
        vehicle_types: Some(vec![
            "Private passenger car".to_string(),
            "Light truck / SUV".to_string(),
            "Motorcycle".to_string(),
        ]),
        repair_benefit_max_vehicle_age: Some(10),
    }
}

fn hero_auto_essential() -> ProductDefinition {
    ProductDefinition {
        id: "hero-auto-essential".to_string(),
        name: "Hero Auto Essential".to_string(),
        description: "Entry-level deductible reimbursement contract for a \
                      single vehicle."
            .to_string(),
        category: ProductCategory::Auto,
        coverage_options: vec![
            CoverageOption::new(
                "Deductible Coverage",
                &["$500"],
                "Deductible amount reimbursed per covered claim",
            ),
            CoverageOption::new("Term Years", &["1", "2"], "Contract length in years"),
        ],
        features: vec![
            "Deductible reimbursement on comprehensive and collision claims".to_string(),
            "One covered claim per contract year".to_string(),
        ],
        exclusions: Some(vec![
            "Claims denied by the primary insurance carrier".to_string(),
            "Commercial, livery, or rideshare use".to_string(),
        ]),
        claims_process: Some(auto_claims_process()),
        vehicle_types: Some(vec![
            "Private passenger car".to_string(),
            "Light truck / SUV".to_string(),
        ]),
        repair_benefit_max_vehicle_age: None,
    }
}

fn hero_home_advantage() -> ProductDefinition {
    ProductDefinition {
        id: "hero-home-advantage".to_string(),
        name: "Hero Home Advantage".to_string(),
        description: "Home deductible reimbursement with optional systems and \
                      appliances coverage."
            .to_string(),
        category: ProductCategory::Home,
        coverage_options: vec![
            CoverageOption::new(
                "Deductible Coverage",
                &["$75", "$125"],
                "Deductible amount reimbursed per covered homeowners claim",
            ),
            CoverageOption::new(
                "Term Years",
                &["1", "2", "3"],
                "Contract length in years",
            ),
            CoverageOption::new(
                "System Coverage",
                &["Appliances Only", "Appliances + Systems"],
                "Which household equipment the repair benefit extends to",
            ),
        ],
        features: vec![
            "Deductible reimbursement on covered homeowners claims".to_string(),
            "Repair benefit for covered appliances".to_string(),
            "24/7 claims concierge".to_string(),
        ],
        exclusions: Some(vec![
            "Pre-existing conditions known at enrollment".to_string(),
            "Flood and earthquake perils".to_string(),
            "Properties used primarily as short-term rentals".to_string(),
        ]),
        claims_process: Some(ClaimsProcess {
            phone: "1-800-435-4663".to_string(),
            website: Some("https://claims.heroprotection.com".to_string()),
            time_limit: "Within 60 days of the covered loss".to_string(),
            required_docs: vec![
                "Homeowners claim settlement letter".to_string(),
                "Proof of deductible payment".to_string(),
            ],
        }),
        vehicle_types: None,
        repair_benefit_max_vehicle_age: None,
    }
}

fn hero_home_essential() -> ProductDefinition {
    ProductDefinition {
        id: "hero-home-essential".to_string(),
        name: "Hero Home Essential".to_string(),
        description: "Flat-rate home deductible reimbursement.".to_string(),
        category: ProductCategory::Home,
        coverage_options: vec![
            CoverageOption::new(
                "Deductible Coverage",
                &["$100"],
                "Deductible amount reimbursed per covered homeowners claim",
            ),
            CoverageOption::new(
                "Term Years",
                &["1", "2", "3"],
                "Contract length in years",
            ),
        ],
        features: vec![
            "Deductible reimbursement on covered homeowners claims".to_string(),
        ],
        exclusions: Some(vec![
            "Pre-existing conditions known at enrollment".to_string(),
            "Flood and earthquake perils".to_string(),
        ]),
        claims_process: None,
        vehicle_types: None,
        repair_benefit_max_vehicle_age: None,
    }
}
