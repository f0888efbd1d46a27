//! Pricing service
//!
//! Estimates a vehicle's current price and projects it forward in time.
//!
//! Estimation is two-tier: the loaded regression model is asked first and
//! any failure on that path silently falls through to a deterministic
//! rule-based formula. Neither operation can fail from the caller's point of
//! view.

use std::sync::Arc;

use crate::app::metrics::ServiceMetrics;
use crate::app::pricing_config::*;
use crate::domain::entities::{FuelType, PriceEstimate, VehicleAttributes};
use crate::domain::ports::PriceModel;
use crate::error::ModelError;

/// Service for pricing vehicles
pub struct PricingService<M>
where
    M: PriceModel,
{
    model: Arc<M>,
    metrics: Arc<ServiceMetrics>,
    default_yearly_rate: f64,
}

impl<M> PricingService<M>
where
    M: PriceModel,
{
    pub fn new(model: Arc<M>, metrics: Arc<ServiceMetrics>, default_yearly_rate: f64) -> Self {
        Self {
            model,
            metrics,
            default_yearly_rate,
        }
    }

    /// Estimate the current price, reporting which path produced it
    pub fn estimate(&self, attributes: &VehicleAttributes) -> PriceEstimate {
        let estimate = match self.model.predict(attributes) {
            Ok(value) if value.is_finite() => PriceEstimate::from_model(value),
            Ok(value) => {
                tracing::warn!(
                    error = %ModelError::NonFinite(value),
                    "Model prediction rejected, using fallback"
                );
                PriceEstimate::from_fallback(fallback_estimate(attributes))
            }
            Err(ModelError::Unavailable) => {
                PriceEstimate::from_fallback(fallback_estimate(attributes))
            }
            Err(e) => {
                tracing::warn!(error = %e, "Model prediction failed, using fallback");
                PriceEstimate::from_fallback(fallback_estimate(attributes))
            }
        };

        self.metrics.record_prediction(estimate.source);
        tracing::debug!(
            value = estimate.value,
            source = %estimate.source,
            model_year = attributes.model_year,
            age = attributes.age,
            "Estimated price"
        );
        estimate
    }

    /// Estimate the current price
    pub fn estimate_price(&self, attributes: &VehicleAttributes) -> f64 {
        self.estimate(attributes).value
    }

    /// Project a price forward, using the configured rate when none is given
    pub fn project(&self, current_price: f64, months_ahead: i32, yearly_rate: Option<f64>) -> f64 {
        project_future_price(
            current_price,
            months_ahead,
            Some(yearly_rate.unwrap_or(self.default_yearly_rate)),
        )
    }

    /// Yearly rate applied when a caller doesn't choose one
    pub fn default_yearly_rate(&self) -> f64 {
        self.default_yearly_rate
    }

    /// Whether a regression model is loaded
    pub fn model_loaded(&self) -> bool {
        self.model.is_available()
    }
}

/// Rule-based estimate used when no model answer is available
///
/// Never returns less than [`PRICE_FLOOR`].
pub fn fallback_estimate(attributes: &VehicleAttributes) -> f64 {
    let years_since_base = f64::from(attributes.model_year) - f64::from(BASE_MODEL_YEAR);
    let base = BASE_PRICE + years_since_base * PER_MODEL_YEAR
        - f64::from(attributes.age) * PER_YEAR_OF_AGE;

    let total = base
        + fuel_adjustment(&attributes.fuel_type)
        + transmission_adjustment(attributes)
        + title_adjustment(attributes);

    total.max(PRICE_FLOOR)
}

/// Additive fuel bonus; unknown fuel types are neutral
pub fn fuel_adjustment(fuel_type: &FuelType) -> f64 {
    match fuel_type {
        FuelType::Electric => ELECTRIC_BONUS,
        FuelType::Hybrid => HYBRID_BONUS,
        FuelType::Diesel => DIESEL_PENALTY,
        FuelType::Gasoline | FuelType::Other(_) => 0.0,
    }
}

fn transmission_adjustment(attributes: &VehicleAttributes) -> f64 {
    if attributes.transmission.is_automatic() {
        AUTOMATIC_BONUS
    } else {
        0.0
    }
}

fn title_adjustment(attributes: &VehicleAttributes) -> f64 {
    if attributes.clean_title {
        CLEAN_TITLE_BONUS
    } else {
        DIRTY_TITLE_PENALTY
    }
}

/// Project a price `months_ahead` months into the future
///
/// Continuous exponential decay: `price * exp(-rate * months / 12)`. Prices
/// that are not strictly positive project to exactly `0.0`. No floor is
/// applied.
pub fn project_future_price(
    current_price: f64,
    months_ahead: i32,
    yearly_rate: Option<f64>,
) -> f64 {
    if current_price.is_nan() || current_price <= 0.0 {
        return 0.0;
    }
    let yearly_rate = yearly_rate.unwrap_or(DEFAULT_YEARLY_RATE);
    let years = f64::from(months_ahead) / 12.0;
    current_price * (-yearly_rate * years).exp()
}

/// Round a currency value to cents for display
pub fn round_currency(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
