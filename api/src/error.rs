//! Unified error types for the CarValue API
//!
//! This module defines error types for each layer:
//! - `DomainError`: Core business logic and storage errors
//! - `ModelError`: Regression model loading and prediction errors
//! - `InputError`: Raw request values that cannot become domain types
//! - `AppError`: Application layer errors (wraps the others for HTTP responses)

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Domain layer errors - pure business logic errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

/// Regression model errors
///
/// Never reach an HTTP response: the pricing service downgrades every one of
/// them to the fallback formula.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("No model loaded")]
    Unavailable,

    #[error("Failed to read model artifact: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed model artifact: {0}")]
    Artifact(String),

    #[error("Model produced a non-finite prediction: {0}")]
    NonFinite(f64),
}

impl From<serde_json::Error> for ModelError {
    fn from(e: serde_json::Error) -> Self {
        ModelError::Artifact(e.to_string())
    }
}

/// Request input errors
#[derive(Debug, Error)]
pub enum InputError {
    #[error("Missing required fields: {}", .missing.join(", "))]
    MissingFields {
        missing: Vec<&'static str>,
        required: &'static [&'static str],
    },

    #[error("Conversion error for '{field}': {value:?} is not {expected}")]
    Conversion {
        field: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("Invalid value for '{field}': {reason}")]
    OutOfRange { field: &'static str, reason: String },
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("{0}")]
    Input(#[from] InputError),

    #[error("Invalid request: {0}")]
    BadRequest(String),
}

/// Error response body for JSON responses
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    required: Option<&'static [&'static str]>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let mut required = None;
        let (status, error, details) = match &self {
            AppError::Domain(DomainError::Validation(msg)) => (
                StatusCode::BAD_REQUEST,
                "Validation error",
                Some(msg.clone()),
            ),
            AppError::Domain(DomainError::Storage(msg)) => {
                tracing::error!("Storage error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                    None,
                )
            }
            AppError::Input(e @ InputError::MissingFields { required: r, .. }) => {
                required = Some(*r);
                (
                    StatusCode::BAD_REQUEST,
                    "Missing required fields",
                    Some(e.to_string()),
                )
            }
            AppError::Input(e @ InputError::Conversion { .. }) => (
                StatusCode::BAD_REQUEST,
                "Conversion error",
                Some(e.to_string()),
            ),
            AppError::Input(e @ InputError::OutOfRange { .. }) => (
                StatusCode::BAD_REQUEST,
                "Validation error",
                Some(e.to_string()),
            ),
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, "Bad request", Some(msg.clone()))
            }
        };

        let body = Json(ErrorResponse {
            error: error.to_string(),
            details,
            required,
        });

        (status, body).into_response()
    }
}
