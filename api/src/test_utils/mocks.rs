//! Mock implementations of port traits
//!
//! In-memory implementations that can be configured for testing.

use async_trait::async_trait;
use chrono::Utc;
use std::sync::{Arc, RwLock};

use crate::domain::entities::{Listing, ListingId, NewListing};
use crate::domain::ports::ListingRepository;
use crate::error::DomainError;

// ============================================================================
// In-Memory Listing Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryListingRepository {
    listings: Arc<RwLock<Vec<Listing>>>,
    fail: bool,
}

impl InMemoryListingRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// A repository whose every call fails with a storage error
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    fn check(&self) -> Result<(), DomainError> {
        if self.fail {
            Err(DomainError::Storage("simulated failure".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl ListingRepository for InMemoryListingRepository {
    async fn create(&self, new_listing: &NewListing) -> Result<Listing, DomainError> {
        self.check()?;
        let mut listings = self.listings.write().unwrap();
        let listing = Listing {
            id: ListingId(listings.len() as i64 + 1),
            attributes: new_listing.attributes.clone(),
            asking_price: new_listing.asking_price,
            recommended_price: new_listing.recommended_price,
            created_at: Utc::now(),
        };
        listings.push(listing.clone());
        Ok(listing)
    }

    async fn list(&self) -> Result<Vec<Listing>, DomainError> {
        self.check()?;
        Ok(self.listings.read().unwrap().clone())
    }
}
