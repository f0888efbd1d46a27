//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod listings;
pub mod pricing;
pub mod service;
pub mod vehicle_input;

pub use listings::{list_listings, publish_listing};
pub use pricing::{current_price, future_price};
pub use service::{health, index, metrics};
