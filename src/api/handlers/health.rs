//! Handler for health check endpoint.

use axum::{Json, extract::State};

use crate::api::dto::health::HealthResponse;
use crate::state::AppState;

/// Returns service status for deployment probes.
///
/// # Endpoint
///
/// `GET /health`
///
/// The service holds no connections or state of its own, so a reachable
/// process is a healthy one; the response reports the crate version and the
/// configured upstream base.
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        upstream: state.upstream_base.clone(),
    })
}
