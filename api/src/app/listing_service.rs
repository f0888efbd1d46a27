//! Listing service
//!
//! Publishes vehicles for sale, attaching the price the engine recommends
//! at publication time.

use std::sync::Arc;

use crate::app::pricing_service::{round_currency, PricingService};
use crate::domain::entities::{Listing, NewListing, VehicleAttributes};
use crate::domain::ports::{ListingRepository, PriceModel};
use crate::error::{AppError, DomainError};

/// Service for publishing and browsing listings
pub struct ListingService<LR, M>
where
    LR: ListingRepository,
    M: PriceModel,
{
    listings: Arc<LR>,
    pricing: Arc<PricingService<M>>,
}

impl<LR, M> ListingService<LR, M>
where
    LR: ListingRepository,
    M: PriceModel,
{
    pub fn new(listings: Arc<LR>, pricing: Arc<PricingService<M>>) -> Self {
        Self { listings, pricing }
    }

    /// Publish a listing with the price recommended for it right now
    pub async fn publish(
        &self,
        attributes: VehicleAttributes,
        asking_price: f64,
    ) -> Result<Listing, AppError> {
        if !asking_price.is_finite() || asking_price <= 0.0 {
            return Err(AppError::Domain(DomainError::Validation(format!(
                "Asking price must be a positive amount, got {}",
                asking_price
            ))));
        }

        let recommended_price = round_currency(self.pricing.estimate_price(&attributes));

        let new_listing = NewListing {
            attributes,
            asking_price,
            recommended_price,
        };
        let listing = self.listings.create(&new_listing).await?;

        tracing::info!(
            listing_id = %listing.id,
            asking_price,
            recommended_price = listing.recommended_price,
            "Listing published"
        );

        Ok(listing)
    }

    /// All published listings, oldest first
    pub async fn list(&self) -> Result<Vec<Listing>, AppError> {
        Ok(self.listings.list().await?)
    }
}
