//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! concrete implementations for the upstream API boundary and the chart
//! rendering primitive.
//!
//! # Modules
//!
//! - [`marvel`] - Marvel API client, wire models, and request authentication
//! - [`chart`] - Bar chart rendering to PNG bytes

pub mod chart;
pub mod marvel;
