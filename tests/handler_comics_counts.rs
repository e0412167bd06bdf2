mod common;

use axum::http::StatusCode;
use axum::{Router, routing::get};
use axum_test::TestServer;
use comics_stats::api::handlers::{from_characters_handler, from_comics_handler};
use httpmock::prelude::*;
use serde_json::Value;

fn test_server(base_url: &str) -> TestServer {
    let state = common::create_test_state(base_url);
    let app = Router::new()
        .route(
            "/api/characters/comics-counts/from-characters",
            get(from_characters_handler),
        )
        .route(
            "/api/characters/comics-counts/from-comics",
            get(from_comics_handler),
        )
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_from_characters_collapses_duplicate_refs() {
    let upstream = MockServer::start_async().await;
    upstream
        .mock_async(|when, then| {
            when.method(GET).path("/v1/public/characters");
            then.status(200).json_body(common::collection_page(
                vec![common::character(
                    1,
                    "Thor",
                    &["/comics/1", "/comics/2", "/comics/2", "/comics/3"],
                )],
                0,
                1,
            ));
        })
        .await;

    let server = test_server(&upstream.base_url());
    let response = server
        .get("/api/characters/comics-counts/from-characters")
        .await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json.as_array().unwrap().len(), 1);
    assert_eq!(json[0]["character_name"], "Thor");
    assert_eq!(json[0]["comics_count"], 3);
}

#[tokio::test]
async fn test_from_characters_filter_is_case_insensitive() {
    let upstream = MockServer::start_async().await;
    upstream
        .mock_async(|when, then| {
            when.method(GET).path("/v1/public/characters");
            then.status(200).json_body(common::collection_page(
                vec![
                    common::character(1, "Loki", &["/comics/1"]),
                    common::character(2, "Thor", &["/comics/1", "/comics/2"]),
                ],
                0,
                2,
            ));
        })
        .await;

    let server = test_server(&upstream.base_url());
    let response = server
        .get("/api/characters/comics-counts/from-characters")
        .add_query_param("character_name", "thor")
        .await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json.as_array().unwrap().len(), 1);
    assert_eq!(json[0]["character_name"], "Thor");
    assert_eq!(json[0]["comics_count"], 2);
}

#[tokio::test]
async fn test_from_characters_limit_truncates_preserving_order() {
    let upstream = MockServer::start_async().await;
    upstream
        .mock_async(|when, then| {
            when.method(GET).path("/v1/public/characters");
            then.status(200).json_body(common::collection_page(
                vec![
                    common::character(1, "Angela", &["/comics/1"]),
                    common::character(2, "Beta Ray Bill", &["/comics/1", "/comics/2"]),
                    common::character(3, "Thor", &["/comics/3"]),
                ],
                0,
                3,
            ));
        })
        .await;

    let server = test_server(&upstream.base_url());
    let response = server
        .get("/api/characters/comics-counts/from-characters")
        .add_query_param("limit", "2")
        .await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json.as_array().unwrap().len(), 2);
    assert_eq!(json[0]["character_name"], "Angela");
    assert_eq!(json[1]["character_name"], "Beta Ray Bill");
}

#[tokio::test]
async fn test_from_characters_zero_limit_is_bad_request() {
    // Validation fails before any upstream call is made.
    let server = test_server("http://127.0.0.1:9");
    let response = server
        .get("/api/characters/comics-counts/from-characters")
        .add_query_param("limit", "0")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let json = response.json::<Value>();
    assert!(json["detail"].is_string());
}

#[tokio::test]
async fn test_from_characters_upstream_failure_is_bad_gateway() {
    let upstream = MockServer::start_async().await;
    upstream
        .mock_async(|when, then| {
            when.method(GET).path("/v1/public/characters");
            then.status(500).body("upstream exploded");
        })
        .await;

    let server = test_server(&upstream.base_url());
    let response = server
        .get("/api/characters/comics-counts/from-characters")
        .await;

    response.assert_status(StatusCode::BAD_GATEWAY);
    let json = response.json::<Value>();
    assert!(json["detail"].is_string());
}

#[tokio::test]
async fn test_from_comics_counts_distinct_comics_per_character() {
    let upstream = MockServer::start_async().await;
    upstream
        .mock_async(|when, then| {
            when.method(GET).path("/v1/public/comics");
            then.status(200).json_body(common::collection_page(
                vec![
                    common::comic(10, "Avengers #1", &["Thor", "Loki"]),
                    common::comic(11, "Thor #1", &["Thor"]),
                ],
                0,
                2,
            ));
        })
        .await;

    let server = test_server(&upstream.base_url());
    let response = server.get("/api/characters/comics-counts/from-comics").await;

    response.assert_status_ok();
    let json = response.json::<Value>();

    // Rows come back in character-name order.
    assert_eq!(json.as_array().unwrap().len(), 2);
    assert_eq!(json[0]["character_name"], "Loki");
    assert_eq!(json[0]["comics_count"], 1);
    assert_eq!(json[1]["character_name"], "Thor");
    assert_eq!(json[1]["comics_count"], 2);
}

#[tokio::test]
async fn test_from_comics_filter() {
    let upstream = MockServer::start_async().await;
    upstream
        .mock_async(|when, then| {
            when.method(GET).path("/v1/public/comics");
            then.status(200).json_body(common::collection_page(
                vec![common::comic(10, "Avengers #1", &["Thor", "Loki"])],
                0,
                1,
            ));
        })
        .await;

    let server = test_server(&upstream.base_url());
    let response = server
        .get("/api/characters/comics-counts/from-comics")
        .add_query_param("character_name", "Loki")
        .await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json.as_array().unwrap().len(), 1);
    assert_eq!(json[0]["character_name"], "Loki");
}

#[tokio::test]
async fn test_from_comics_upstream_failure_is_bad_gateway() {
    let upstream = MockServer::start_async().await;
    upstream
        .mock_async(|when, then| {
            when.method(GET).path("/v1/public/comics");
            then.status(503);
        })
        .await;

    let server = test_server(&upstream.base_url());
    let response = server.get("/api/characters/comics-counts/from-comics").await;

    response.assert_status(StatusCode::BAD_GATEWAY);
    let json = response.json::<Value>();
    assert!(json["detail"].is_string());
}
