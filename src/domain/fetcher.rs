//! Fetcher trait for the upstream comics API boundary.

use crate::domain::entities::{CharacterRecord, ComicRecord};
use crate::error::AppError;
use async_trait::async_trait;

/// A batch of records fetched from an upstream collection, together with the
/// total-count signal reported by the upstream API for that collection.
///
/// `records.len()` may be smaller than `total` when a fetch cap applies.
#[derive(Debug, Clone)]
pub struct FetchBatch<T> {
    pub records: Vec<T>,
    pub total: u64,
}

/// Boundary interface for the upstream comics data provider.
///
/// # Implementations
///
/// - [`crate::infrastructure::marvel::MarvelClient`] - Marvel API implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ComicsFetcher: Send + Sync {
    /// Fetches characters from the character-centric collection in upstream
    /// name order, paginating as needed.
    ///
    /// `limit` caps the number of records fetched; `None` falls back to the
    /// implementation's configured bound.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upstream`] if the HTTP call fails, returns a
    /// non-success status, or the body cannot be decoded.
    async fn fetch_characters(
        &self,
        limit: Option<u32>,
    ) -> Result<FetchBatch<CharacterRecord>, AppError>;

    /// Fetches comics from the comic-centric collection, paginating as
    /// needed up to the implementation's configured bound.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upstream`] on any upstream failure.
    async fn fetch_comics(&self) -> Result<FetchBatch<ComicRecord>, AppError>;
}
