//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//! The price model port is mocked with mockall (see `MockPriceModel`);
//! repositories get hand-written in-memory versions.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
