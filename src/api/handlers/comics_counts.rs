//! Handlers for the JSON comics-count endpoints.

use axum::{
    Json,
    extract::{Query, State},
};

use crate::api::dto::comics_counts::{CharacterComicsData, CharacterNameQuery, FromCharactersQuery};
use crate::error::AppError;
use crate::state::AppState;

/// Counts distinct comics per character via the character-centric path.
///
/// # Endpoint
///
/// `GET /api/characters/comics-counts/from-characters`
///
/// # Query Parameters
///
/// - `character_name` (optional): Case-insensitive exact name filter
/// - `limit` (optional): Positive integer, truncates the result rows
///
/// # Errors
///
/// Returns 400 Bad Request when `limit` is zero.
/// Returns 502 Bad Gateway when the upstream fetch fails.
pub async fn from_characters_handler(
    State(state): State<AppState>,
    Query(params): Query<FromCharactersQuery>,
) -> Result<Json<Vec<CharacterComicsData>>, AppError> {
    let limit = params.validated_limit().map_err(AppError::bad_request)?;

    let rows = state
        .stats_service
        .counts_from_characters(params.character_name.as_deref(), limit)
        .await?;

    Ok(Json(rows.into_iter().map(CharacterComicsData::from).collect()))
}

/// Counts distinct comics per character via the comic-centric path.
///
/// # Endpoint
///
/// `GET /api/characters/comics-counts/from-comics`
///
/// # Query Parameters
///
/// - `character_name` (optional): Case-insensitive exact name filter
///
/// No limit parameter exists on this path.
///
/// # Errors
///
/// Returns 502 Bad Gateway when the upstream fetch fails.
pub async fn from_comics_handler(
    State(state): State<AppState>,
    Query(params): Query<CharacterNameQuery>,
) -> Result<Json<Vec<CharacterComicsData>>, AppError> {
    let rows = state
        .stats_service
        .counts_from_comics(params.character_name.as_deref())
        .await?;

    Ok(Json(rows.into_iter().map(CharacterComicsData::from).collect()))
}
