//! Domain ports (traits)
//!
//! Port traits define interfaces that the domain layer requires.
//! Adapters provide concrete implementations of these traits.

pub mod price_model;
pub mod repositories;

#[cfg(test)]
pub use price_model::MockPriceModel;
pub use price_model::PriceModel;
pub use repositories::ListingRepository;
