//! Core business entities.

pub mod aggregate;
pub mod character;
pub mod comic;

pub use aggregate::AggregateRow;
pub use character::CharacterRecord;
pub use comic::ComicRecord;
