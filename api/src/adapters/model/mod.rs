//! Regression model adapters
//!
//! `LoadedPriceModel` is what the service runs with: either a model read
//! from disk at start-up or the absent stand-in.

pub mod noop;
pub mod regression;

use std::path::Path;

pub use noop::NoopPriceModel;
pub use regression::RegressionModel;

use crate::domain::entities::VehicleAttributes;
use crate::domain::ports::PriceModel;
use crate::error::ModelError;

/// The model handle chosen at start-up
#[derive(Debug, Clone)]
pub enum LoadedPriceModel {
    Present(RegressionModel),
    Absent(NoopPriceModel),
}

impl LoadedPriceModel {
    /// Load the artifact at `path`, degrading to `Absent` on any failure
    pub fn load(path: &Path) -> Self {
        match RegressionModel::from_path(path) {
            Ok(model) => {
                tracing::info!(path = %path.display(), name = model.name(), "Price model loaded");
                LoadedPriceModel::Present(model)
            }
            Err(ModelError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!(
                    path = %path.display(),
                    "Price model not found, using fallback pricing"
                );
                LoadedPriceModel::Absent(NoopPriceModel)
            }
            Err(e) => {
                tracing::error!(
                    path = %path.display(),
                    error = %e,
                    "Failed to load price model, using fallback pricing"
                );
                LoadedPriceModel::Absent(NoopPriceModel)
            }
        }
    }

    /// Name of the loaded model, if any
    pub fn name(&self) -> Option<&str> {
        match self {
            LoadedPriceModel::Present(model) => Some(model.name()),
            LoadedPriceModel::Absent(_) => None,
        }
    }
}

impl PriceModel for LoadedPriceModel {
    fn predict(&self, attributes: &VehicleAttributes) -> Result<f64, ModelError> {
        match self {
            LoadedPriceModel::Present(model) => model.predict(attributes),
            LoadedPriceModel::Absent(model) => model.predict(attributes),
        }
    }

    fn is_available(&self) -> bool {
        match self {
            LoadedPriceModel::Present(model) => model.is_available(),
            LoadedPriceModel::Absent(model) => model.is_available(),
        }
    }
}
