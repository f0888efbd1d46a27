//! JSON linear regression model
//!
//! Loads a linear model exported from the training notebook. Numeric
//! features are multiplied by their weight; categorical features are one-hot
//! encoded, and categories the model never saw contribute nothing.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::domain::entities::VehicleAttributes;
use crate::domain::ports::PriceModel;
use crate::error::ModelError;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct NumericWeights {
    #[serde(default)]
    model_year: f64,
    #[serde(default)]
    age: f64,
    #[serde(default)]
    clean_title: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct CategoricalWeights {
    #[serde(default)]
    fuel_type: HashMap<String, f64>,
    #[serde(default)]
    transmission: HashMap<String, f64>,
}

/// Linear regression model loaded from a JSON artifact
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegressionModel {
    #[serde(default = "default_name")]
    name: String,
    intercept: f64,
    #[serde(default)]
    numeric: NumericWeights,
    #[serde(default)]
    categorical: CategoricalWeights,
}

fn default_name() -> String {
    "unnamed".to_string()
}

impl RegressionModel {
    /// Read and validate an artifact from disk
    pub fn from_path(path: &Path) -> Result<Self, ModelError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    /// Parse and validate an artifact
    pub fn from_json(raw: &str) -> Result<Self, ModelError> {
        let model: RegressionModel = serde_json::from_str(raw)?;
        model.validate()?;
        Ok(model)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    fn validate(&self) -> Result<(), ModelError> {
        let numeric = [
            ("intercept", self.intercept),
            ("numeric.model_year", self.numeric.model_year),
            ("numeric.age", self.numeric.age),
            ("numeric.clean_title", self.numeric.clean_title),
        ];
        for (field, weight) in numeric {
            if !weight.is_finite() {
                return Err(ModelError::Artifact(format!(
                    "weight '{}' is not finite",
                    field
                )));
            }
        }

        let categorical = [
            ("fuel_type", &self.categorical.fuel_type),
            ("transmission", &self.categorical.transmission),
        ];
        for (feature, weights) in categorical {
            if let Some((category, _)) = weights.iter().find(|(_, w)| !w.is_finite()) {
                return Err(ModelError::Artifact(format!(
                    "weight '{}.{}' is not finite",
                    feature, category
                )));
            }
        }

        Ok(())
    }
}

impl PriceModel for RegressionModel {
    fn predict(&self, attributes: &VehicleAttributes) -> Result<f64, ModelError> {
        let numeric = self.numeric.model_year * f64::from(attributes.model_year)
            + self.numeric.age * f64::from(attributes.age)
            + self.numeric.clean_title * attributes.clean_title_flag();

        let categorical = self
            .categorical
            .fuel_type
            .get(attributes.fuel_type.as_str())
            .copied()
            .unwrap_or(0.0)
            + self
                .categorical
                .transmission
                .get(attributes.transmission.as_str())
                .copied()
                .unwrap_or(0.0);

        let prediction = self.intercept + numeric + categorical;
        if prediction.is_finite() {
            Ok(prediction)
        } else {
            Err(ModelError::NonFinite(prediction))
        }
    }
}
