//! Request telemetry
//!
//! Middleware feeding the injected `ServiceMetrics` counters.

pub mod request_counter;

pub use request_counter::count_requests;
