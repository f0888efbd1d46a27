//! Pricing handlers
//!
//! Current-price estimates and depreciated future prices. Vehicle attributes
//! arrive as query parameters.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::app::round_currency;
use crate::domain::entities::{EstimateSource, VehicleAttributes};
use crate::error::{AppError, InputError};
use crate::handlers::vehicle_input::{parse_decimal, parse_integer, RawValue, RawVehicle};
use crate::AppState;

/// Query parameters shared by the pricing endpoints
#[derive(Debug, Default, Deserialize)]
pub struct PriceQuery {
    pub model_year: Option<String>,
    pub age: Option<String>,
    pub fuel_type: Option<String>,
    pub transmission: Option<String>,
    pub clean_title: Option<String>,
    /// Projection horizon (future price only)
    pub months: Option<String>,
    /// Yearly depreciation rate override (future price only)
    pub yearly_rate: Option<String>,
}

impl PriceQuery {
    fn vehicle(&self) -> RawVehicle {
        RawVehicle {
            model_year: self.model_year.clone().map(RawValue::from),
            age: self.age.clone().map(RawValue::from),
            fuel_type: self.fuel_type.clone().map(RawValue::from),
            transmission: self.transmission.clone().map(RawValue::from),
            clean_title: self.clean_title.clone().map(RawValue::from),
        }
    }

    fn months(&self, default: i32) -> Result<i32, InputError> {
        let Some(raw) = self.months.as_ref().filter(|m| !m.trim().is_empty()) else {
            return Ok(default);
        };
        let months = parse_integer("months", RawValue::Text(raw.clone()))?;
        i32::try_from(months).map_err(|_| InputError::OutOfRange {
            field: "months",
            reason: format!("{} is out of range", months),
        })
    }

    fn yearly_rate(&self) -> Result<Option<f64>, InputError> {
        self.yearly_rate
            .as_ref()
            .filter(|r| !r.trim().is_empty())
            .map(|raw| parse_decimal("yearly_rate", RawValue::Text(raw.clone())))
            .transpose()
    }
}

/// Response body for a current-price estimate
#[derive(Debug, Serialize)]
pub struct CurrentPriceResponse {
    pub attributes: VehicleAttributes,
    pub current_price: f64,
    pub source: EstimateSource,
}

/// Response body for a future-price projection
#[derive(Debug, Serialize)]
pub struct FuturePriceResponse {
    pub attributes: VehicleAttributes,
    pub months: i32,
    pub yearly_rate: f64,
    pub current_price: f64,
    pub future_price: f64,
    pub source: EstimateSource,
}

/// GET /price/current
///
/// Estimate what a vehicle is worth today.
pub async fn current_price(
    State(state): State<AppState>,
    Query(query): Query<PriceQuery>,
) -> Result<Json<CurrentPriceResponse>, AppError> {
    let attributes = query.vehicle().into_attributes()?;

    let estimate = state.pricing_service.estimate(&attributes);

    Ok(Json(CurrentPriceResponse {
        attributes,
        current_price: round_currency(estimate.value),
        source: estimate.source,
    }))
}

/// GET /price/future
///
/// Estimate today's price and project it `months` ahead (default 12) with
/// continuous exponential depreciation. A rate and horizon whose projection
/// overflows `f64` is rejected.
pub async fn future_price(
    State(state): State<AppState>,
    Query(query): Query<PriceQuery>,
) -> Result<Json<FuturePriceResponse>, AppError> {
    let months = query.months(state.config.default_horizon_months)?;
    let yearly_rate = query
        .yearly_rate()?
        .unwrap_or_else(|| state.pricing_service.default_yearly_rate());
    let attributes = query.vehicle().into_attributes()?;

    let estimate = state.pricing_service.estimate(&attributes);
    let future_price = round_currency(state.pricing_service.project(
        estimate.value,
        months,
        Some(yearly_rate),
    ));
    if !future_price.is_finite() {
        return Err(InputError::OutOfRange {
            field: "yearly_rate",
            reason: format!(
                "projecting {} months at a yearly rate of {} overflows",
                months, yearly_rate
            ),
        }
        .into());
    }

    Ok(Json(FuturePriceResponse {
        attributes,
        months,
        yearly_rate,
        current_price: round_currency(estimate.value),
        future_price,
        source: estimate.source,
    }))
}
