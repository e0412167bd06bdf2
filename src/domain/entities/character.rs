/// A character as returned by the character-centric upstream collection.
///
/// `comic_refs` holds the opaque identifiers of the comics embedded in the
/// character record. References may repeat; consumers that need a count must
/// deduplicate.
#[derive(Debug, Clone)]
pub struct CharacterRecord {
    pub id: i64,
    pub name: String,
    pub comic_refs: Vec<String>,
}

impl CharacterRecord {
    pub fn new(id: i64, name: impl Into<String>, comic_refs: Vec<String>) -> Self {
        Self {
            id,
            name: name.into(),
            comic_refs,
        }
    }
}
