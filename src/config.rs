//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts; a missing API key aborts the process instead of failing
//! mid-request.
//!
//! ## Required Variables
//!
//! - `MARVEL_API_PUBLIC_KEY` - Marvel developer portal public key
//! - `MARVEL_API_PRIVATE_KEY` - Marvel developer portal private key
//!
//! ## Optional Variables
//!
//! - `MARVEL_API_BASE_URL` - Upstream base (default: `https://gateway.marvel.com`)
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `HTTP_TIMEOUT_SECONDS` - Upstream request timeout (default: 30)
//! - `FETCH_PAGE_SIZE` - Records per upstream page, max 100 (default: 100)
//! - `MAX_FETCH_RECORDS` - Cap on records fetched per request (default: 300)

use anyhow::{Context, Result};
use std::env;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub public_key: String,
    pub private_key: String,
    pub base_url: String,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Total request timeout for upstream calls, in seconds.
    pub http_timeout_seconds: u64,
    /// Page size used when walking the upstream collections.
    /// The Marvel API rejects values above 100.
    pub fetch_page_size: u32,
    /// Upper bound on records fetched from upstream within a single request.
    pub max_fetch_records: u32,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if either API key is missing.
    pub fn from_env() -> Result<Self> {
        let public_key =
            env::var("MARVEL_API_PUBLIC_KEY").context("MARVEL_API_PUBLIC_KEY must be set")?;
        let private_key =
            env::var("MARVEL_API_PRIVATE_KEY").context("MARVEL_API_PRIVATE_KEY must be set")?;

        let base_url = env::var("MARVEL_API_BASE_URL")
            .unwrap_or_else(|_| "https://gateway.marvel.com".to_string());

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let http_timeout_seconds = env::var("HTTP_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);

        let fetch_page_size = env::var("FETCH_PAGE_SIZE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(100);

        let max_fetch_records = env::var("MAX_FETCH_RECORDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(300);

        Ok(Self {
            public_key,
            private_key,
            base_url,
            listen_addr,
            log_level,
            log_format,
            http_timeout_seconds,
            fetch_page_size,
            max_fetch_records,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - either API key is empty
    /// - `base_url` is not an http(s) URL
    /// - `fetch_page_size` is 0 or above the upstream cap of 100
    /// - `listen_addr` is invalid
    /// - `log_format` is not `text` or `json`
    pub fn validate(&self) -> Result<()> {
        if self.public_key.is_empty() {
            anyhow::bail!("MARVEL_API_PUBLIC_KEY must not be empty");
        }
        if self.private_key.is_empty() {
            anyhow::bail!("MARVEL_API_PRIVATE_KEY must not be empty");
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            anyhow::bail!(
                "MARVEL_API_BASE_URL must start with 'http://' or 'https://', got '{}'",
                self.base_url
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if self.http_timeout_seconds == 0 {
            anyhow::bail!("HTTP_TIMEOUT_SECONDS must be greater than 0");
        }

        if self.fetch_page_size == 0 || self.fetch_page_size > 100 {
            anyhow::bail!(
                "FETCH_PAGE_SIZE must be between 1 and 100, got {}",
                self.fetch_page_size
            );
        }

        if self.max_fetch_records == 0 {
            anyhow::bail!("MAX_FETCH_RECORDS must be greater than 0");
        }

        Ok(())
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Upstream: {}", self.base_url);
        tracing::info!("  Public key: {}", mask_api_key(&self.public_key));
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Fetch page size: {}", self.fetch_page_size);
        tracing::info!("  Max fetch records: {}", self.max_fetch_records);
    }
}

/// Masks an API key for logging, keeping only a short recognizable prefix.
fn mask_api_key(key: &str) -> String {
    if key.len() <= 4 {
        return "***".to_string();
    }
    format!("{}***", &key[..4])
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
