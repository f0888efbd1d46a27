//! Service telemetry counters
//!
//! Created once in `main` and handed to whoever records into it, so tests get
//! a fresh set of counters per service instance.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use serde::Serialize;

use crate::domain::entities::EstimateSource;

/// Process-wide request and prediction counters
#[derive(Debug)]
pub struct ServiceMetrics {
    started_at: Instant,
    requests: AtomicU64,
    model_predictions: AtomicU64,
    fallback_predictions: AtomicU64,
}

/// Point-in-time copy of the counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub uptime_secs: u64,
    pub requests: u64,
    pub predictions: u64,
    pub model_predictions: u64,
    pub fallback_predictions: u64,
}

impl ServiceMetrics {
    pub fn new() -> Self {
        Self {
            started_at: Instant::now(),
            requests: AtomicU64::new(0),
            model_predictions: AtomicU64::new(0),
            fallback_predictions: AtomicU64::new(0),
        }
    }

    pub fn record_request(&self) {
        self.requests.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_prediction(&self, source: EstimateSource) {
        let counter = match source {
            EstimateSource::Model => &self.model_predictions,
            EstimateSource::Fallback => &self.fallback_predictions,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        let model_predictions = self.model_predictions.load(Ordering::Relaxed);
        let fallback_predictions = self.fallback_predictions.load(Ordering::Relaxed);
        MetricsSnapshot {
            uptime_secs: self.started_at.elapsed().as_secs(),
            requests: self.requests.load(Ordering::Relaxed),
            predictions: model_predictions + fallback_predictions,
            model_predictions,
            fallback_predictions,
        }
    }
}

impl Default for ServiceMetrics {
    fn default() -> Self {
        Self::new()
    }
}
