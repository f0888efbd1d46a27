//! Price estimate value object

use serde::{Deserialize, Serialize};

/// Which pricing path produced an estimate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EstimateSource {
    /// The loaded regression model
    Model,
    /// The rule-based formula
    Fallback,
}

impl std::fmt::Display for EstimateSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EstimateSource::Model => write!(f, "model"),
            EstimateSource::Fallback => write!(f, "fallback"),
        }
    }
}

/// A current-price estimate in currency units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceEstimate {
    pub value: f64,
    pub source: EstimateSource,
}

impl PriceEstimate {
    pub fn from_model(value: f64) -> Self {
        Self {
            value,
            source: EstimateSource::Model,
        }
    }

    pub fn from_fallback(value: f64) -> Self {
        Self {
            value,
            source: EstimateSource::Fallback,
        }
    }
}
