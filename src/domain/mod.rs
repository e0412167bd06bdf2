//! Domain layer: core entities and the fetcher boundary trait.

pub mod entities;
pub mod fetcher;
