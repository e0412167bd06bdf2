//! Business logic services for the application layer.

pub mod comics_stats_service;

pub use comics_stats_service::ComicsStatsService;
