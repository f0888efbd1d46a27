//! Request counting middleware

use axum::{body::Body, extract::State, http::Request, middleware::Next, response::Response};

use crate::AppState;

/// Count every request that reaches the router
pub async fn count_requests(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    state.metrics.record_request();
    next.run(request).await
}
