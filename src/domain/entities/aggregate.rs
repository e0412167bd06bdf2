/// The single output entity of the service: a character name paired with the
/// number of distinct comics it appears in.
///
/// Invariant: `comics_count` counts *distinct* comic identifiers, never raw
/// (possibly duplicated) references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregateRow {
    pub character_name: String,
    pub comics_count: u64,
}

impl AggregateRow {
    pub fn new(character_name: impl Into<String>, comics_count: u64) -> Self {
        Self {
            character_name: character_name.into(),
            comics_count,
        }
    }
}
