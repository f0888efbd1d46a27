//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod json_file;
pub mod model;

pub use json_file::JsonFileListingRepository;
pub use model::LoadedPriceModel;
