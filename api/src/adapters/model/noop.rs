//! Absent model
//!
//! Stands in when no artifact could be loaded. Every prediction reports
//! `ModelError::Unavailable`, which routes the pricing service to the
//! fallback formula.

use crate::domain::entities::VehicleAttributes;
use crate::domain::ports::PriceModel;
use crate::error::ModelError;

/// Price model that is never available
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopPriceModel;

impl PriceModel for NoopPriceModel {
    fn predict(&self, _attributes: &VehicleAttributes) -> Result<f64, ModelError> {
        Err(ModelError::Unavailable)
    }

    fn is_available(&self) -> bool {
        false
    }
}
