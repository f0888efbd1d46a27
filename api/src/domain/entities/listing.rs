//! Listing domain entity
//!
//! A vehicle offered for sale together with the price the engine recommended
//! when it was published. Listings are append-only.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::VehicleAttributes;

/// Sequential identifier for a listing (1-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListingId(pub i64);

impl std::fmt::Display for ListingId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A published listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: ListingId,
    #[serde(flatten)]
    pub attributes: VehicleAttributes,
    /// Price asked by the seller
    pub asking_price: f64,
    /// Engine estimate at publication time
    pub recommended_price: f64,
    pub created_at: DateTime<Utc>,
}

/// Data needed to create a new listing
#[derive(Debug, Clone)]
pub struct NewListing {
    pub attributes: VehicleAttributes,
    pub asking_price: f64,
    pub recommended_price: f64,
}
