//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /health`                    - Health check (public)
//! - `GET /visualize/comics-counts`   - PNG bar chart (public)
//! - `/api/*`                         - JSON data endpoints
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, visualize_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/health", get(health_handler))
        .route("/visualize/comics-counts", get(visualize_handler))
        .nest("/api", api::routes::data_routes())
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
