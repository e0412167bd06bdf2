//! HTTP server initialization and runtime setup.
//!
//! Handles upstream client construction, service wiring, and Axum server
//! lifecycle.

use crate::application::services::ComicsStatsService;
use crate::config::Config;
use crate::infrastructure::marvel::MarvelClient;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Marvel API client (authenticated, with request timeout)
/// - Aggregation service
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - The upstream client cannot be constructed
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let client = MarvelClient::new(&config)?;
    tracing::info!("Upstream client ready for {}", config.base_url);

    let stats_service = Arc::new(ComicsStatsService::new(Arc::new(client)));

    let state = AppState {
        stats_service,
        upstream_base: config.base_url.clone(),
    };

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;

    Ok(())
}
