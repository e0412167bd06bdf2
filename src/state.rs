use std::sync::Arc;

use crate::application::services::ComicsStatsService;
use crate::infrastructure::marvel::MarvelClient;

/// Shared application state injected into all handlers.
///
/// Built once at startup; nothing here mutates between requests.
#[derive(Clone)]
pub struct AppState {
    pub stats_service: Arc<ComicsStatsService<MarvelClient>>,
    /// Upstream base URL, reported by the health endpoint.
    pub upstream_base: String,
}
