//! Vehicle domain entity
//!
//! The attribute record the pricing engine consumes. Built fresh for every
//! request and never mutated afterwards.

use serde::{Deserialize, Serialize};

/// Fuel type of a vehicle
///
/// Unrecognised values are kept verbatim so the model adapter can still see
/// them; the fallback formula treats them as neutral.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FuelType {
    Gasoline,
    Diesel,
    Hybrid,
    Electric,
    Other(String),
}

impl FuelType {
    pub fn as_str(&self) -> &str {
        match self {
            FuelType::Gasoline => "Gasoline",
            FuelType::Diesel => "Diesel",
            FuelType::Hybrid => "Hybrid",
            FuelType::Electric => "Electric",
            FuelType::Other(raw) => raw,
        }
    }
}

impl From<&str> for FuelType {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "gasoline" => FuelType::Gasoline,
            "diesel" => FuelType::Diesel,
            "hybrid" => FuelType::Hybrid,
            "electric" => FuelType::Electric,
            _ => FuelType::Other(s.trim().to_string()),
        }
    }
}

impl From<String> for FuelType {
    fn from(s: String) -> Self {
        FuelType::from(s.as_str())
    }
}

impl From<FuelType> for String {
    fn from(f: FuelType) -> Self {
        f.as_str().to_string()
    }
}

impl std::fmt::Display for FuelType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Gearbox type of a vehicle
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Transmission {
    Automatic,
    Manual,
    Other(String),
}

impl Transmission {
    pub fn as_str(&self) -> &str {
        match self {
            Transmission::Automatic => "Automatic",
            Transmission::Manual => "Manual",
            Transmission::Other(raw) => raw,
        }
    }

    pub fn is_automatic(&self) -> bool {
        matches!(self, Transmission::Automatic)
    }
}

impl From<&str> for Transmission {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "automatic" => Transmission::Automatic,
            "manual" => Transmission::Manual,
            _ => Transmission::Other(s.trim().to_string()),
        }
    }
}

impl From<String> for Transmission {
    fn from(s: String) -> Self {
        Transmission::from(s.as_str())
    }
}

impl From<Transmission> for String {
    fn from(t: Transmission) -> Self {
        t.as_str().to_string()
    }
}

impl std::fmt::Display for Transmission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Attributes the pricing engine needs to value a vehicle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleAttributes {
    pub model_year: i32,
    /// Years since first registration
    pub age: u32,
    pub fuel_type: FuelType,
    pub transmission: Transmission,
    pub clean_title: bool,
}

impl VehicleAttributes {
    /// Numeric encoding of the title flag (1 = clean, 0 = not clean)
    pub fn clean_title_flag(&self) -> f64 {
        if self.clean_title {
            1.0
        } else {
            0.0
        }
    }
}
