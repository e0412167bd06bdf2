/// A comic as returned by the comic-centric upstream collection.
///
/// `character_names` lists the characters appearing in the comic, as named
/// by the upstream embedded character summaries.
#[derive(Debug, Clone)]
pub struct ComicRecord {
    pub id: i64,
    pub title: String,
    pub character_names: Vec<String>,
}

impl ComicRecord {
    pub fn new(id: i64, title: impl Into<String>, character_names: Vec<String>) -> Self {
        Self {
            id,
            title: title.into(),
            character_names,
        }
    }
}
