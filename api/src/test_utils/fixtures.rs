//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use crate::domain::entities::{FuelType, NewListing, Transmission, VehicleAttributes};

/// Linear model artifact used by adapter and router tests
pub const SAMPLE_MODEL_JSON: &str = r#"{
    "name": "used-cars-linear",
    "intercept": -1000000.0,
    "numeric": {
        "model_year": 505.0,
        "age": -750.0,
        "clean_title": 1500.0
    },
    "categorical": {
        "fuel_type": { "Electric": 3200.0, "Hybrid": 1600.0, "Diesel": -400.0 },
        "transmission": { "Automatic": 400.0 }
    }
}"#;

/// 2020 gasoline automatic, four years old, clean title
pub fn test_vehicle() -> VehicleAttributes {
    test_vehicle_with(2020, 4, FuelType::Gasoline, Transmission::Automatic, true)
}

/// Create a vehicle with every attribute chosen
pub fn test_vehicle_with(
    model_year: i32,
    age: u32,
    fuel_type: FuelType,
    transmission: Transmission,
    clean_title: bool,
) -> VehicleAttributes {
    VehicleAttributes {
        model_year,
        age,
        fuel_type,
        transmission,
        clean_title,
    }
}

/// Create a new listing for the default test vehicle
pub fn test_new_listing(asking_price: f64) -> NewListing {
    NewListing {
        attributes: test_vehicle(),
        asking_price,
        recommended_price: 24_300.0,
    }
}
