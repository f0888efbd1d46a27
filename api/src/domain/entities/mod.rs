//! Domain entities
//!
//! Pure domain models representing the vehicles being priced and the
//! listings published for them.

pub mod estimate;
pub mod listing;
pub mod vehicle;

pub use estimate::{EstimateSource, PriceEstimate};
pub use listing::{Listing, ListingId, NewListing};
pub use vehicle::{FuelType, Transmission, VehicleAttributes};
