//! Wire models for the Marvel API JSON envelope.
//!
//! Every collection endpoint wraps its payload in the same
//! `{ code, status, data: { offset, limit, total, count, results } }`
//! envelope; only the `results` element type differs.

use serde::Deserialize;

use crate::domain::entities::{CharacterRecord, ComicRecord};

/// Top-level response envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiWrapper<T> {
    pub code: i32,
    pub status: String,
    pub data: DataContainer<T>,
}

/// Paginated payload container.
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct DataContainer<T> {
    #[serde(default)]
    pub offset: u32,
    #[serde(default)]
    pub limit: u32,
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub results: Vec<T>,
}

/// A character element of the `/v1/public/characters` collection.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiCharacter {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub comics: ResourceList,
}

/// A comic element of the `/v1/public/comics` collection.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiComic {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub characters: ResourceList,
}

/// An embedded resource collection (`comics` on a character, `characters`
/// on a comic). `available` may exceed `items.len()`; upstream embeds at
/// most 20 summaries.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResourceList {
    #[serde(default)]
    pub available: u32,
    #[serde(default)]
    pub returned: u32,
    #[serde(default)]
    pub items: Vec<ResourceSummary>,
}

/// A single embedded resource summary.
#[derive(Debug, Clone, Deserialize)]
pub struct ResourceSummary {
    #[serde(rename = "resourceURI")]
    pub resource_uri: Option<String>,
    pub name: String,
}

impl ResourceSummary {
    /// Opaque identifier of the referenced resource: the resource URI when
    /// present, otherwise the summary name.
    pub fn identifier(&self) -> &str {
        self.resource_uri.as_deref().unwrap_or(&self.name)
    }
}

impl From<ApiCharacter> for CharacterRecord {
    fn from(character: ApiCharacter) -> Self {
        let comic_refs = character
            .comics
            .items
            .iter()
            .map(|item| item.identifier().to_string())
            .collect();

        CharacterRecord::new(character.id, character.name, comic_refs)
    }
}

impl From<ApiComic> for ComicRecord {
    fn from(comic: ApiComic) -> Self {
        let character_names = comic
            .characters
            .items
            .iter()
            .map(|item| item.name.clone())
            .collect();

        ComicRecord::new(comic.id, comic.title, character_names)
    }
}
