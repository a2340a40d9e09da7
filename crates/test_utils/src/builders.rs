//! Builders for quote request inputs

use serde_json::{json, Value};

use domain_rating::{Address, CoverageSelections, CustomerData, VehicleData};

/// Fluent builder for coverage selection maps
///
/// Values go in as raw JSON so tests can exercise the same loose typing
/// real requests carry (`"2"` vs `2`).
#[derive(Debug, Default)]
pub struct SelectionsBuilder {
    selections: CoverageSelections,
}

impl SelectionsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a string-valued selection
    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.selections.insert(key, json!(value));
        self
    }

    /// Adds a selection with an arbitrary JSON value
    pub fn with_raw(mut self, key: &str, value: Value) -> Self {
        self.selections.insert(key, value);
        self
    }

    pub fn build(self) -> CoverageSelections {
        self.selections
    }
}

/// Builder for vehicle quote data
#[derive(Debug, Default)]
pub struct VehicleBuilder {
    vehicle: VehicleData,
}

impl VehicleBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn model_year(mut self, year: i32) -> Self {
        self.vehicle.year = Some(year);
        self
    }

    pub fn make_model(mut self, make: &str, model: &str) -> Self {
        self.vehicle.make = Some(make.to_string());
        self.vehicle.model = Some(model.to_string());
        self
    }

    pub fn mileage(mut self, mileage: u32) -> Self {
        self.vehicle.mileage = Some(mileage);
        self
    }

    pub fn build(self) -> VehicleData {
        self.vehicle
    }
}

/// Builder for customer quote data
#[derive(Debug, Default)]
pub struct CustomerBuilder {
    address: Address,
}

impl CustomerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(mut self, state: &str) -> Self {
        self.address.state = Some(state.to_string());
        self
    }

    pub fn city(mut self, city: &str) -> Self {
        self.address.city = Some(city.to_string());
        self
    }

    pub fn zip(mut self, zip: &str) -> Self {
        self.address.zip = Some(zip.to_string());
        self
    }

    pub fn build(self) -> CustomerData {
        CustomerData {
            address: Some(self.address),
        }
    }
}
