//! Handler for the bar chart visualization endpoint.

use axum::{
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
};

use crate::api::dto::comics_counts::CharacterNameQuery;
use crate::error::AppError;
use crate::infrastructure::chart;
use crate::state::AppState;

/// Renders comics counts as a PNG bar chart.
///
/// # Endpoint
///
/// `GET /visualize/comics-counts`
///
/// # Query Parameters
///
/// - `character_name` (optional): Case-insensitive exact name filter
///
/// Aggregation always runs the character-centric path. A filter matching
/// nothing renders an empty chart, not an error.
///
/// # Errors
///
/// Returns 502 Bad Gateway when the upstream fetch fails.
/// Returns 500 Internal Server Error when rendering fails.
pub async fn visualize_handler(
    State(state): State<AppState>,
    Query(params): Query<CharacterNameQuery>,
) -> Result<Response, AppError> {
    let rows = state
        .stats_service
        .counts_from_characters(params.character_name.as_deref(), None)
        .await?;

    let png = chart::render_comics_count_png(&rows)
        .map_err(|e| AppError::internal(format!("chart rendering failed: {e}")))?;

    Ok(([(header::CONTENT_TYPE, "image/png")], png).into_response())
}
