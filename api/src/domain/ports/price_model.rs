//! Price model port trait
//!
//! Abstracts the externally trained regression model. The model is loaded
//! once at start-up and only read afterwards, so implementations must be
//! safe to call from many request tasks at once.

use crate::domain::entities::VehicleAttributes;
use crate::error::ModelError;

/// Port trait for a "predict one row, get one scalar" model
#[cfg_attr(test, mockall::automock)]
pub trait PriceModel: Send + Sync {
    /// Predict the current price for a single vehicle
    fn predict(&self, attributes: &VehicleAttributes) -> Result<f64, ModelError>;

    /// Whether a real model backs this port
    fn is_available(&self) -> bool {
        true
    }
}
