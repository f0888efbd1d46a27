//! JSON file adapter for ListingRepository
//!
//! Listings live in a single pretty-printed JSON array. Every write rewrites
//! the whole file through a temporary sibling and a rename.

use std::path::PathBuf;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;

use crate::domain::entities::{Listing, ListingId, NewListing};
use crate::domain::ports::ListingRepository;
use crate::error::DomainError;

/// JSON file implementation of ListingRepository
pub struct JsonFileListingRepository {
    path: PathBuf,
    // Serializes read-modify-write cycles on the file
    lock: Mutex<()>,
}

impl JsonFileListingRepository {
    /// Open the store at `path`, creating it (and its parent directories)
    /// with an empty array if it doesn't exist yet
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, DomainError> {
        let path = path.into();

        if !tokio::fs::try_exists(&path).await.map_err(storage_error)? {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(storage_error)?;
            }
            tokio::fs::write(&path, b"[]").await.map_err(storage_error)?;
            tracing::info!(path = %path.display(), "Created listing store");
        }

        Ok(Self {
            path,
            lock: Mutex::new(()),
        })
    }

    async fn read_all(&self) -> Result<Vec<Listing>, DomainError> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(storage_error)?;
        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }
        serde_json::from_str(&raw).map_err(|e| {
            DomainError::Storage(format!("corrupt listing store {}: {}", self.path.display(), e))
        })
    }

    async fn write_all(&self, listings: &[Listing]) -> Result<(), DomainError> {
        let json = serde_json::to_vec_pretty(listings)
            .map_err(|e| DomainError::Storage(e.to_string()))?;
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, json).await.map_err(storage_error)?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(storage_error)?;
        Ok(())
    }
}

fn storage_error(e: std::io::Error) -> DomainError {
    DomainError::Storage(e.to_string())
}

#[async_trait]
impl ListingRepository for JsonFileListingRepository {
    async fn create(&self, listing: &NewListing) -> Result<Listing, DomainError> {
        let _guard = self.lock.lock().await;

        let mut listings = self.read_all().await?;
        let created = Listing {
            id: ListingId(listings.len() as i64 + 1),
            attributes: listing.attributes.clone(),
            asking_price: listing.asking_price,
            recommended_price: listing.recommended_price,
            created_at: Utc::now(),
        };
        listings.push(created.clone());
        self.write_all(&listings).await?;

        Ok(created)
    }

    async fn list(&self) -> Result<Vec<Listing>, DomainError> {
        let _guard = self.lock.lock().await;
        self.read_all().await
    }
}
