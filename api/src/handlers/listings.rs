//! Listing handlers
//!
//! Endpoints for publishing a vehicle for sale and browsing what has been
//! published.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::entities::Listing;
use crate::error::{AppError, InputError};
use crate::handlers::vehicle_input::{parse_decimal, RawValue, RawVehicle};
use crate::AppState;

/// Fields a publish request must carry
pub const LISTING_FIELDS: &[&str] = &[
    "model_year",
    "age",
    "fuel_type",
    "transmission",
    "clean_title",
    "price",
];

/// Request body for publishing a listing
#[derive(Debug, Deserialize)]
pub struct PublishListingRequest {
    #[serde(flatten)]
    pub vehicle: RawVehicle,
    /// Asking price
    #[serde(alias = "precio")]
    pub price: Option<RawValue>,
}

/// Response body for a published listing
#[derive(Debug, Serialize)]
pub struct PublishListingResponse {
    pub message: String,
    pub listing_id: i64,
    pub asking_price: f64,
    pub recommended_price: f64,
    pub listing: Listing,
}

/// Response body for the listing index
#[derive(Debug, Serialize)]
pub struct ListingsResponse {
    pub total: usize,
    pub listings: Vec<Listing>,
}

/// POST /listings
///
/// Publish a vehicle with an asking price. The response carries the price
/// the engine recommends for the same vehicle.
pub async fn publish_listing(
    State(state): State<AppState>,
    payload: Result<Json<PublishListingRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<PublishListingResponse>), AppError> {
    let Json(request) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;

    let mut missing = request.vehicle.missing();
    let price = request.price.filter(|p| !p.is_blank());
    if price.is_none() {
        missing.push("price");
    }
    let Some(price) = price.filter(|_| missing.is_empty()) else {
        return Err(InputError::MissingFields {
            missing,
            required: LISTING_FIELDS,
        }
        .into());
    };

    let asking_price = parse_decimal("price", price)?;
    let attributes = request.vehicle.into_attributes()?;

    let listing = state
        .listing_service
        .publish(attributes, asking_price)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(PublishListingResponse {
            message: "Vehicle published successfully".to_string(),
            listing_id: listing.id.0,
            asking_price: listing.asking_price,
            recommended_price: listing.recommended_price,
            listing,
        }),
    ))
}

/// GET /listings
///
/// Every published listing, oldest first.
pub async fn list_listings(
    State(state): State<AppState>,
) -> Result<Json<ListingsResponse>, AppError> {
    let listings = state.listing_service.list().await?;
    Ok(Json(ListingsResponse {
        total: listings.len(),
        listings,
    }))
}
