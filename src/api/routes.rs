//! API route configuration.

use crate::api::handlers::{from_characters_handler, from_comics_handler};
use crate::state::AppState;
use axum::{Router, routing::get};

/// JSON data endpoints, mounted under `/api`.
///
/// # Endpoints
///
/// - `GET /characters/comics-counts/from-characters` - Path A aggregation
///   (`character_name`, `limit` query parameters)
/// - `GET /characters/comics-counts/from-comics` - Path B aggregation
///   (`character_name` query parameter)
pub fn data_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/characters/comics-counts/from-characters",
            get(from_characters_handler),
        )
        .route(
            "/characters/comics-counts/from-comics",
            get(from_comics_handler),
        )
}
