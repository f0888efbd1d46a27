//! JSON file adapter
//!
//! Flat-file persistence for listings.

pub mod listing_repo;

pub use listing_repo::JsonFileListingRepository;
