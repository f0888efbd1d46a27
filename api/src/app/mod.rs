//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities, ports, and external systems.

pub mod listing_service;
pub mod metrics;
pub mod pricing_config;
pub mod pricing_service;

pub use listing_service::ListingService;
pub use metrics::{MetricsSnapshot, ServiceMetrics};
// Re-export pricing constants for public API
#[allow(unused_imports)]
pub use pricing_config::*;
pub use pricing_service::{round_currency, PricingService};
