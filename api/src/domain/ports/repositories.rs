//! Repository port traits
//!
//! These traits define the interface for listing persistence.
//! Implementations are provided by adapters (e.g., a JSON file).

use async_trait::async_trait;

use crate::domain::entities::{Listing, NewListing};
use crate::error::DomainError;

/// Append-only repository for Listing entities
#[async_trait]
pub trait ListingRepository: Send + Sync {
    /// Store a new listing and assign it the next sequential id
    async fn create(&self, listing: &NewListing) -> Result<Listing, DomainError>;

    /// List every stored listing in insertion order
    async fn list(&self) -> Result<Vec<Listing>, DomainError>;
}
