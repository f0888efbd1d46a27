//! Raw vehicle input
//!
//! Turns loosely typed request values (query strings or JSON) into
//! `VehicleAttributes`. The clean-title flag accepts `1/0`, `Yes/No` and
//! `true/false`.

use serde::Deserialize;

use crate::domain::entities::{FuelType, Transmission, VehicleAttributes};
use crate::error::InputError;

/// Fields every pricing request must carry
pub const VEHICLE_FIELDS: &[&str] = &[
    "model_year",
    "age",
    "fuel_type",
    "transmission",
    "clean_title",
];

/// A single request value before conversion
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Bool(bool),
    Number(serde_json::Number),
    Text(String),
}

impl RawValue {
    /// Empty strings count as absent
    pub fn is_blank(&self) -> bool {
        matches!(self, RawValue::Text(s) if s.trim().is_empty())
    }

    fn display(&self) -> String {
        match self {
            RawValue::Bool(b) => b.to_string(),
            RawValue::Number(n) => n.to_string(),
            RawValue::Text(s) => s.clone(),
        }
    }
}

impl From<String> for RawValue {
    fn from(s: String) -> Self {
        RawValue::Text(s)
    }
}

/// Vehicle fields as they arrive on the wire
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawVehicle {
    pub model_year: Option<RawValue>,
    pub age: Option<RawValue>,
    pub fuel_type: Option<RawValue>,
    pub transmission: Option<RawValue>,
    pub clean_title: Option<RawValue>,
}

impl RawVehicle {
    /// Names of required fields that are absent or blank
    pub fn missing(&self) -> Vec<&'static str> {
        [
            ("model_year", &self.model_year),
            ("age", &self.age),
            ("fuel_type", &self.fuel_type),
            ("transmission", &self.transmission),
            ("clean_title", &self.clean_title),
        ]
        .into_iter()
        .filter(|&(_, value)| value.as_ref().map_or(true, RawValue::is_blank))
        .map(|(name, _)| name)
        .collect()
    }

    /// Validate and convert into domain attributes
    pub fn into_attributes(self) -> Result<VehicleAttributes, InputError> {
        let missing = self.missing();
        if !missing.is_empty() {
            return Err(InputError::MissingFields {
                missing,
                required: VEHICLE_FIELDS,
            });
        }

        let model_year = parse_integer("model_year", required("model_year", self.model_year)?)?;
        let model_year = i32::try_from(model_year).map_err(|_| InputError::OutOfRange {
            field: "model_year",
            reason: format!("{} is out of range", model_year),
        })?;

        let age = parse_integer("age", required("age", self.age)?)?;
        let age = u32::try_from(age).map_err(|_| InputError::OutOfRange {
            field: "age",
            reason: format!("must be a non-negative number of years, got {}", age),
        })?;

        let fuel_type = FuelType::from(parse_text(
            "fuel_type",
            required("fuel_type", self.fuel_type)?,
        )?);
        let transmission = Transmission::from(parse_text(
            "transmission",
            required("transmission", self.transmission)?,
        )?);
        let clean_title = parse_flag("clean_title", required("clean_title", self.clean_title)?)?;

        Ok(VehicleAttributes {
            model_year,
            age,
            fuel_type,
            transmission,
            clean_title,
        })
    }
}

fn required(field: &'static str, value: Option<RawValue>) -> Result<RawValue, InputError> {
    value.ok_or(InputError::MissingFields {
        missing: vec![field],
        required: VEHICLE_FIELDS,
    })
}

fn conversion(field: &'static str, value: &RawValue, expected: &'static str) -> InputError {
    InputError::Conversion {
        field,
        value: value.display(),
        expected,
    }
}

/// Parse a whole number; `2020.0` is accepted, `2020.5` is not
pub fn parse_integer(field: &'static str, value: RawValue) -> Result<i64, InputError> {
    const EXPECTED: &str = "a whole number";

    let as_float = match &value {
        RawValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                return Ok(i);
            }
            n.as_f64()
        }
        RawValue::Text(s) => {
            let s = s.trim();
            if let Ok(i) = s.parse::<i64>() {
                return Ok(i);
            }
            s.parse::<f64>().ok()
        }
        RawValue::Bool(_) => None,
    };

    match as_float {
        Some(f) if f.is_finite() && f.fract() == 0.0 && f.abs() < i64::MAX as f64 => Ok(f as i64),
        _ => Err(conversion(field, &value, EXPECTED)),
    }
}

/// Parse a finite decimal number
pub fn parse_decimal(field: &'static str, value: RawValue) -> Result<f64, InputError> {
    const EXPECTED: &str = "a number";

    let parsed = match &value {
        RawValue::Number(n) => n.as_f64(),
        RawValue::Text(s) => s.trim().parse::<f64>().ok(),
        RawValue::Bool(_) => None,
    };

    match parsed {
        Some(f) if f.is_finite() => Ok(f),
        _ => Err(conversion(field, &value, EXPECTED)),
    }
}

fn parse_text(field: &'static str, value: RawValue) -> Result<String, InputError> {
    match value {
        RawValue::Text(s) => Ok(s.trim().to_string()),
        other => Err(conversion(field, &other, "a string")),
    }
}

/// Normalize a yes/no flag to a bool
pub fn parse_flag(field: &'static str, value: RawValue) -> Result<bool, InputError> {
    const EXPECTED: &str = "1/0, Yes/No or true/false";

    match &value {
        RawValue::Bool(b) => Ok(*b),
        RawValue::Number(n) => match n.as_f64() {
            Some(f) if f == 1.0 => Ok(true),
            Some(f) if f == 0.0 => Ok(false),
            _ => Err(conversion(field, &value, EXPECTED)),
        },
        RawValue::Text(s) => match s.trim().to_lowercase().as_str() {
            "1" | "1.0" | "yes" | "y" | "true" => Ok(true),
            "0" | "0.0" | "no" | "n" | "false" => Ok(false),
            _ => Err(conversion(field, &value, EXPECTED)),
        },
    }
}
