//! Distinct-comic counts per character, computed from either upstream
//! collection.

use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use crate::domain::entities::{AggregateRow, CharacterRecord, ComicRecord};
use crate::domain::fetcher::ComicsFetcher;
use crate::error::AppError;

/// Service producing `(character_name, comics_count)` rows.
///
/// Two independent aggregation paths exist: one walking character records
/// and counting their embedded comic references, the other walking comic
/// records and tallying character appearances. For consistent upstream
/// data both produce equivalent counts per character.
pub struct ComicsStatsService<F: ComicsFetcher> {
    fetcher: Arc<F>,
}

impl<F: ComicsFetcher> ComicsStatsService<F> {
    /// Creates a new aggregation service.
    pub fn new(fetcher: Arc<F>) -> Self {
        Self { fetcher }
    }

    /// Counts distinct comics per character from the character-centric
    /// collection, preserving upstream order.
    ///
    /// The optional `character_name` filter matches case-insensitively and
    /// exactly; `limit` truncates the assembled rows to the first N entries.
    /// When no filter is present the limit also caps the upstream fetch.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upstream`] if the fetch fails.
    pub async fn counts_from_characters(
        &self,
        character_name: Option<&str>,
        limit: Option<u32>,
    ) -> Result<Vec<AggregateRow>, AppError> {
        // Forwarding the limit while a name filter is active could starve
        // the filter of candidate rows, so the cap only applies unfiltered.
        let fetch_cap = if character_name.is_none() { limit } else { None };

        let batch = self.fetcher.fetch_characters(fetch_cap).await?;
        tracing::debug!(
            fetched = batch.records.len(),
            total = batch.total,
            "aggregating from characters"
        );

        let mut rows = rows_from_characters(&batch.records);
        if let Some(name) = character_name {
            filter_by_name(&mut rows, name);
        }
        if let Some(limit) = limit {
            rows.truncate(limit as usize);
        }

        Ok(rows)
    }

    /// Counts distinct comics per character from the comic-centric
    /// collection, in character-name order.
    ///
    /// Accepts the same name filter as the character path but no limit; the
    /// upstream source never supported one here and the asymmetry is kept.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Upstream`] if the fetch fails.
    pub async fn counts_from_comics(
        &self,
        character_name: Option<&str>,
    ) -> Result<Vec<AggregateRow>, AppError> {
        let batch = self.fetcher.fetch_comics().await?;
        tracing::debug!(
            fetched = batch.records.len(),
            total = batch.total,
            "aggregating from comics"
        );

        let mut rows = rows_from_comics(&batch.records);
        if let Some(name) = character_name {
            filter_by_name(&mut rows, name);
        }

        Ok(rows)
    }
}

/// Path A: one row per character, counting its distinct embedded comic
/// references. Duplicated references collapse.
fn rows_from_characters(records: &[CharacterRecord]) -> Vec<AggregateRow> {
    records
        .iter()
        .map(|character| {
            let distinct: HashSet<&str> =
                character.comic_refs.iter().map(String::as_str).collect();
            AggregateRow::new(character.name.clone(), distinct.len() as u64)
        })
        .collect()
}

/// Path B: group comic identifiers by appearing character, then count each
/// character's set. The BTreeMap pins output to character-name order.
fn rows_from_comics(records: &[ComicRecord]) -> Vec<AggregateRow> {
    let mut by_character: BTreeMap<&str, HashSet<i64>> = BTreeMap::new();
    for comic in records {
        for name in &comic.character_names {
            by_character.entry(name.as_str()).or_default().insert(comic.id);
        }
    }

    by_character
        .into_iter()
        .map(|(name, comics)| AggregateRow::new(name, comics.len() as u64))
        .collect()
}

/// Case-insensitive exact match on the character name.
fn filter_by_name(rows: &mut Vec<AggregateRow>, name: &str) {
    rows.retain(|row| row.character_name.eq_ignore_ascii_case(name));
}
