//! Integration tests for the idea REST API.
//!
//! Runs the full router against an in-memory storage, covering:
//! - Search with filters, `q` decoding, limits and continuation tokens
//! - Create, replace and delete with payload validation
//! - Health, liveness and readiness probes

mod common;

use std::time::Duration;

use axum::http::StatusCode;
use ideas_rest::ServerConfig;
use serde_json::{Value, json};

use common::create_test_server;
use common::fixtures::{idea_payload, stored_idea};

// ============================================================================
// Search
// ============================================================================

#[tokio::test]
async fn test_search_returns_items_and_token() {
    let (server, storage) = create_test_server();
    for id in 1..=3 {
        storage.insert(stored_idea(id, &format!("Trip {id}")));
    }

    let response = server.get("/idea").add_query_param("limit", "2").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["total"], 3);
    assert_eq!(body["items"].as_array().map(Vec::len), Some(2));
    assert_eq!(body["items"][0]["itinerary_name"], "Trip 1");
    assert_eq!(body["items"][0]["tags"], json!(["forest", "family"]));
    assert_eq!(body["search_after"], "2");
}

#[tokio::test]
async fn test_search_follows_continuation_token() {
    let (server, storage) = create_test_server();
    for id in 1..=3 {
        storage.insert(stored_idea(id, &format!("Trip {id}")));
    }

    let response = server
        .get("/idea")
        .add_query_param("limit", "2")
        .add_query_param("search_after", "2")
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["items"].as_array().map(Vec::len), Some(1));
    assert_eq!(body["items"][0]["id"], 3);
    assert!(body.get("search_after").is_none());

    let search = storage.last_search().expect("search recorded");
    assert_eq!(search.page.scroll_token.as_deref(), Some("2"));
}

#[tokio::test]
async fn test_search_passes_filters_in_order() {
    let (server, storage) = create_test_server();

    server
        .get("/idea")
        .add_query_param("tags", "hiking&(lake|river)")
        .add_query_param("experience_hours", "[2,4]")
        .await
        .assert_status_ok();

    let search = storage.last_search().expect("search recorded");
    let pairs: Vec<(&str, &str)> = search
        .filters
        .iter()
        .map(|f| (f.key.as_str(), f.raw_value.as_str()))
        .collect();
    assert_eq!(
        pairs,
        vec![("tags", "hiking&(lake|river)"), ("experience_hours", "[2,4]")]
    );
}

#[tokio::test]
async fn test_search_decodes_q_parameter() {
    let (server, storage) = create_test_server();

    server
        .get("/idea?q=keyword%3Dcamping%26rewilding_mode%3Dslow")
        .await
        .assert_status_ok();

    let search = storage.last_search().expect("search recorded");
    let keys: Vec<&str> = search.filters.iter().map(|f| f.key.as_str()).collect();
    assert_eq!(keys, vec!["keyword", "rewilding_mode"]);
    assert_eq!(search.filters[0].raw_value, "camping");
}

#[tokio::test]
async fn test_search_unknown_filter_is_rejected() {
    let (server, storage) = create_test_server();

    let response = server
        .get("/idea")
        .add_query_param("keyword", "camping")
        .add_query_param("bogus", "1")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "invalid_filter");
    assert!(body["error"]["message"].as_str().unwrap().contains("bogus"));
    assert!(storage.last_search().is_none());
}

#[tokio::test]
async fn test_search_limit_fallback_and_clamp() {
    let (server, storage) = create_test_server();

    server.get("/idea?limit=abc").await.assert_status_ok();
    assert_eq!(storage.last_search().unwrap().page.page_size, 8);

    server.get("/idea?limit=0").await.assert_status_ok();
    assert_eq!(storage.last_search().unwrap().page.page_size, 8);

    server.get("/idea?limit=500").await.assert_status_ok();
    assert_eq!(storage.last_search().unwrap().page.page_size, 100);
}

#[tokio::test]
async fn test_search_first_limit_wins() {
    let (server, storage) = create_test_server();

    server.get("/idea?limit=abc&limit=5").await.assert_status_ok();
    assert_eq!(storage.last_search().unwrap().page.page_size, 8);
}

#[tokio::test]
async fn test_search_carries_deadline() {
    let (server, storage) = create_test_server();

    server.get("/idea").await.assert_status_ok();

    let search = storage.last_search().expect("search recorded");
    assert_eq!(
        search.page.timeout,
        Some(Duration::from_millis(ServerConfig::for_testing().search_timeout_ms))
    );
}

#[tokio::test]
async fn test_search_backend_down() {
    let (server, storage) = create_test_server();
    storage.set_down(true);

    let response = server.get("/idea").add_query_param("keyword", "camping").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "unavailable");
}

// ============================================================================
// Create / Replace / Delete
// ============================================================================

#[tokio::test]
async fn test_create_idea() {
    let (server, storage) = create_test_server();

    let response = server.post("/idea").json(&idea_payload(7)).await;

    response.assert_status(StatusCode::CREATED);
    response.assert_json(&json!({ "id": 7 }));

    let stored = storage.get(7).expect("idea stored");
    assert_eq!(stored.itinerary_name, "Coastal walk");
    assert_eq!(stored.tags, "hiking,sea");
}

#[tokio::test]
async fn test_create_invalid_payload_lists_violations() {
    let (server, storage) = create_test_server();

    let response = server
        .post("/idea")
        .json(&json!({ "idea_id": 0, "itinerary_name": "Coastal walk" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "invalid");
    let details = body["error"]["details"].as_array().expect("details");
    assert!(details.len() >= 3);
    assert_eq!(storage.len(), 0);
}

#[tokio::test]
async fn test_create_rejects_separator_in_tag() {
    let (server, storage) = create_test_server();

    let mut payload = idea_payload(8);
    payload["tags"] = json!(["hot spring, outdoor"]);
    let response = server.post("/idea").json(&payload).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "invalid");
    assert_eq!(body["error"]["details"].as_array().map(Vec::len), Some(1));
    assert_eq!(storage.len(), 0);
}

#[tokio::test]
async fn test_create_malformed_json() {
    let (server, _storage) = create_test_server();

    let response = server
        .post("/idea")
        .content_type("application/json")
        .bytes("{not json".into())
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "bad_request");
}

#[tokio::test]
async fn test_update_idea_uses_path_id() {
    let (server, storage) = create_test_server();
    storage.insert(stored_idea(12, "Old name"));

    let response = server.put("/idea/12").json(&idea_payload(99)).await;

    response.assert_status_ok();
    response.assert_json(&json!({ "id": 12 }));
    let stored = storage.get(12).expect("idea stored");
    assert_eq!(stored.itinerary_name, "Coastal walk");
    assert!(storage.get(99).is_none());
}

#[tokio::test]
async fn test_update_non_numeric_id() {
    let (server, _storage) = create_test_server();

    let response = server.put("/idea/abc").json(&idea_payload(1)).await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_idea_then_not_found() {
    let (server, storage) = create_test_server();
    storage.insert(stored_idea(5, "Doomed"));

    server
        .delete("/idea/5")
        .await
        .assert_status(StatusCode::NO_CONTENT);
    assert!(storage.get(5).is_none());

    let response = server.delete("/idea/5").await;
    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["error"]["code"], "not_found");
}

// ============================================================================
// Health
// ============================================================================

#[tokio::test]
async fn test_health_endpoints() {
    let (server, storage) = create_test_server();

    let response = server.get("/health").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["backend"], "memory");

    server.get("/_liveness").await.assert_status_ok();
    server.get("/_readiness").await.assert_status_ok();

    storage.set_down(true);

    let response = server.get("/health").await;
    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    let body: Value = response.json();
    assert_eq!(body["status"], "unhealthy");

    server
        .get("/_readiness")
        .await
        .assert_status(StatusCode::SERVICE_UNAVAILABLE);
    server.get("/_liveness").await.assert_status_ok();
}
