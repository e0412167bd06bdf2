#![allow(dead_code)]

use std::sync::Arc;

use comics_stats::application::services::ComicsStatsService;
use comics_stats::config::Config;
use comics_stats::infrastructure::marvel::MarvelClient;
use comics_stats::state::AppState;
use serde_json::{Value, json};

/// Configuration pointing at a mocked upstream.
pub fn test_config(base_url: &str) -> Config {
    Config {
        public_key: "1234".to_string(),
        private_key: "abcd".to_string(),
        base_url: base_url.to_string(),
        listen_addr: "127.0.0.1:0".to_string(),
        log_level: "info".to_string(),
        log_format: "text".to_string(),
        http_timeout_seconds: 5,
        fetch_page_size: 100,
        max_fetch_records: 300,
    }
}

pub fn create_test_state(base_url: &str) -> AppState {
    let client = MarvelClient::new(&test_config(base_url)).unwrap();

    AppState {
        stats_service: Arc::new(ComicsStatsService::new(Arc::new(client))),
        upstream_base: base_url.to_string(),
    }
}

/// Builds an upstream character result with embedded comic references.
pub fn character(id: i64, name: &str, comic_uris: &[&str]) -> Value {
    let items: Vec<Value> = comic_uris
        .iter()
        .map(|uri| json!({ "resourceURI": uri, "name": uri }))
        .collect();

    json!({
        "id": id,
        "name": name,
        "comics": {
            "available": items.len(),
            "returned": items.len(),
            "items": items,
        }
    })
}

/// Builds an upstream comic result with embedded character summaries.
pub fn comic(id: i64, title: &str, character_names: &[&str]) -> Value {
    let items: Vec<Value> = character_names
        .iter()
        .map(|name| {
            json!({
                "resourceURI": format!("http://gateway.marvel.com/v1/public/characters/{name}"),
                "name": name,
            })
        })
        .collect();

    json!({
        "id": id,
        "title": title,
        "characters": {
            "available": items.len(),
            "returned": items.len(),
            "items": items,
        }
    })
}

/// Wraps results in the Marvel collection envelope.
pub fn collection_page(results: Vec<Value>, offset: usize, total: usize) -> Value {
    json!({
        "code": 200,
        "status": "Ok",
        "data": {
            "offset": offset,
            "limit": 100,
            "total": total,
            "count": results.len(),
            "results": results,
        }
    })
}
