//! HTTP client for the Marvel collections.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use thiserror::Error;
use url::Url;

use crate::config::Config;
use crate::domain::entities::{CharacterRecord, ComicRecord};
use crate::domain::fetcher::{ComicsFetcher, FetchBatch};
use crate::error::AppError;
use crate::infrastructure::marvel::auth::ApiAuth;
use crate::infrastructure::marvel::models::{ApiCharacter, ApiComic, ApiWrapper, DataContainer};

const CHARACTERS_PATH: &str = "/v1/public/characters";
const COMICS_PATH: &str = "/v1/public/comics";

/// Errors from the Marvel API boundary.
#[derive(Error, Debug)]
pub enum MarvelError {
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("upstream returned status {0}")]
    Status(StatusCode),
}

impl From<MarvelError> for AppError {
    fn from(e: MarvelError) -> Self {
        AppError::upstream(format!("Marvel API request failed: {e}"))
    }
}

/// Authenticated client for the Marvel character and comic collections.
///
/// Walks paginated collections with `offset`/`limit`, bounded by the
/// configured page size (upstream caps pages at 100) and record cap.
pub struct MarvelClient {
    http: reqwest::Client,
    base_url: Url,
    auth: ApiAuth,
    page_size: u32,
    max_records: u32,
}

impl MarvelClient {
    /// Builds a client from validated configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL does not parse or the underlying
    /// HTTP client cannot be constructed.
    pub fn new(config: &Config) -> Result<Self, MarvelError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.http_timeout_seconds))
            .build()?;

        Ok(Self {
            http,
            base_url: Url::parse(&config.base_url)?,
            auth: ApiAuth::new(&config.public_key, &config.private_key),
            page_size: config.fetch_page_size,
            max_records: config.max_fetch_records,
        })
    }

    /// Walks a collection page by page until `cap` records are collected,
    /// the upstream total is reached, or a short page signals the end.
    async fn fetch_pages<T, R>(
        &self,
        path: &str,
        extra: &[(&str, &str)],
        cap: u32,
    ) -> Result<FetchBatch<R>, MarvelError>
    where
        T: DeserializeOwned,
        R: From<T>,
    {
        let cap = cap.max(1);
        let mut records: Vec<R> = Vec::new();
        let mut total: u64 = 0;
        let mut offset: u32 = 0;

        loop {
            let remaining = cap - records.len() as u32;
            let page_size = self.page_size.min(remaining);

            let page = self.get_page::<T>(path, extra, offset, page_size).await?;
            total = u64::from(page.total);

            let count = page.results.len() as u32;
            records.extend(page.results.into_iter().map(R::from));
            offset += count;

            let done = count == 0
                || count < page_size
                || records.len() as u32 >= cap
                || records.len() as u64 >= total;
            if done {
                break;
            }
        }

        tracing::debug!(path, fetched = records.len(), total, "upstream fetch complete");

        Ok(FetchBatch { records, total })
    }

    /// Issues one authenticated GET for a single collection page.
    async fn get_page<T: DeserializeOwned>(
        &self,
        path: &str,
        extra: &[(&str, &str)],
        offset: u32,
        limit: u32,
    ) -> Result<DataContainer<T>, MarvelError> {
        let url = self.base_url.join(path)?;

        let mut params: Vec<(&str, String)> = self.auth.query_params();
        params.push(("limit", limit.to_string()));
        params.push(("offset", offset.to_string()));
        for (key, value) in extra {
            params.push((*key, (*value).to_string()));
        }

        tracing::debug!(%url, offset, limit, "requesting upstream page");

        let response = self.http.get(url).query(&params).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(path, %status, "upstream returned non-success status");
            return Err(MarvelError::Status(status));
        }

        let wrapper: ApiWrapper<T> = response.json().await?;
        Ok(wrapper.data)
    }
}

#[async_trait]
impl ComicsFetcher for MarvelClient {
    async fn fetch_characters(
        &self,
        limit: Option<u32>,
    ) -> Result<FetchBatch<CharacterRecord>, AppError> {
        let cap = limit.map_or(self.max_records, |l| l.min(self.max_records));
        let batch = self
            .fetch_pages::<ApiCharacter, CharacterRecord>(
                CHARACTERS_PATH,
                &[("orderBy", "name")],
                cap,
            )
            .await?;
        Ok(batch)
    }

    async fn fetch_comics(&self) -> Result<FetchBatch<ComicRecord>, AppError> {
        let batch = self
            .fetch_pages::<ApiComic, ComicRecord>(COMICS_PATH, &[], self.max_records)
            .await?;
        Ok(batch)
    }
}
