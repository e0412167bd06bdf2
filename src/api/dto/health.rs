//! Health check response shape.

use serde::Serialize;

/// Service health summary.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// Configured upstream base URL. Credentials never appear here.
    pub upstream: String,
}
