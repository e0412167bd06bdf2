//! # Comics Stats
//!
//! A service aggregating distinct-comic counts per Marvel character, built
//! with Axum.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer
//! separation:
//!
//! - **Domain Layer** ([`domain`]) - Core entities and the fetcher trait
//! - **Application Layer** ([`application`]) - Aggregation logic
//! - **Infrastructure Layer** ([`infrastructure`]) - Marvel API client and chart rendering
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Data Flow
//!
//! Strictly one-directional: fetcher → aggregator → presentation. Nothing is
//! cached or persisted; every request re-fetches and re-aggregates.
//!
//! ## Quick Start
//!
//! ```bash
//! # Set required environment variables
//! export MARVEL_API_PUBLIC_KEY="..."
//! export MARVEL_API_PRIVATE_KEY="..."
//!
//! # Start the service
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::ComicsStatsService;
    pub use crate::domain::entities::{AggregateRow, CharacterRecord, ComicRecord};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
