//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod comics_counts;
pub mod health;
pub mod visualize;

pub use comics_counts::{from_characters_handler, from_comics_handler};
pub use health::health_handler;
pub use visualize::visualize_handler;
