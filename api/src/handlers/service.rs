//! Service handlers
//!
//! Index, health and telemetry endpoints.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::app::MetricsSnapshot;
use crate::AppState;

#[derive(Serialize)]
pub struct IndexResponse {
    message: &'static str,
    endpoints: Vec<EndpointInfo>,
}

#[derive(Serialize)]
struct EndpointInfo {
    route: &'static str,
    description: &'static str,
}

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    version: &'static str,
    model_loaded: bool,
}

#[derive(Serialize)]
pub struct MetricsResponse {
    #[serde(flatten)]
    counters: MetricsSnapshot,
    model_loaded: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    model_name: Option<String>,
}

/// GET /
pub async fn index() -> Json<IndexResponse> {
    Json(IndexResponse {
        message: "Vehicle price estimation and listing API",
        endpoints: vec![
            EndpointInfo {
                route: "GET /price/current",
                description: "Estimate the current price of a vehicle",
            },
            EndpointInfo {
                route: "GET /price/future",
                description: "Project the vehicle price N months ahead",
            },
            EndpointInfo {
                route: "POST /listings",
                description: "Publish a vehicle for sale",
            },
            EndpointInfo {
                route: "GET /listings",
                description: "List published vehicles",
            },
        ],
    })
}

/// GET /health
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        model_loaded: state.pricing_service.model_loaded(),
    })
}

/// GET /metrics
pub async fn metrics(State(state): State<AppState>) -> Json<MetricsResponse> {
    Json(MetricsResponse {
        counters: state.metrics.snapshot(),
        model_loaded: state.pricing_service.model_loaded(),
        model_name: state.model_name.clone(),
    })
}
