//! Marvel API integration: authentication, wire models, and the HTTP client.

pub mod auth;
pub mod client;
pub mod models;

pub use auth::ApiAuth;
pub use client::{MarvelClient, MarvelError};
