//! Query parameters and response shape for the comics-count endpoints.

use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};

use crate::domain::entities::AggregateRow;

/// Query parameters for the character-centric endpoint.
///
/// Uses `serde_with` to parse the limit from query strings as an integer.
#[serde_as]
#[derive(Debug, Deserialize)]
pub struct FromCharactersQuery {
    pub character_name: Option<String>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub limit: Option<u32>,
}

impl FromCharactersQuery {
    /// Validates the optional limit.
    ///
    /// # Validation
    ///
    /// - Limit, when present, must be a positive integer.
    pub fn validated_limit(&self) -> Result<Option<u32>, String> {
        match self.limit {
            Some(0) => Err("limit must be greater than 0".to_string()),
            other => Ok(other),
        }
    }
}

/// Query parameters for the comic-centric and visualization endpoints.
#[derive(Debug, Deserialize)]
pub struct CharacterNameQuery {
    pub character_name: Option<String>,
}

/// One aggregated result row as returned to API callers.
#[derive(Debug, Serialize)]
pub struct CharacterComicsData {
    pub character_name: String,
    pub comics_count: u64,
}

impl From<AggregateRow> for CharacterComicsData {
    fn from(row: AggregateRow) -> Self {
        Self {
            character_name: row.character_name,
            comics_count: row.comics_count,
        }
    }
}
