//! Application layer: aggregation logic over the fetcher boundary.

pub mod services;
