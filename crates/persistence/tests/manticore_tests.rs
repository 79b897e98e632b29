//! Manticore backend integration tests.
//!
//! The Manticore HTTP API is stood in for by a mockito server, so these tests
//! check the exact requests sent and how responses and failures are mapped.
//!
//! Run with: `cargo test -p ideas-persistence -- manticore`

#![cfg(feature = "manticore")]

use std::io::Write;
use std::time::Duration;

use ideas_persistence::backends::manticore::{ManticoreBackend, ManticoreConfig};
use ideas_persistence::core::{Backend, BackendKind, IdeaStorage, SearchProvider};
use ideas_persistence::error::{BackendError, ResourceError, SearchError, StorageError};
use ideas_persistence::types::{Filter, IdeaData, PageRequest};
use mockito::{Matcher, Server};
use serde_json::json;

fn backend_for(url: &str) -> ManticoreBackend {
    ManticoreBackend::new(ManticoreConfig {
        url: url.to_string(),
        ..Default::default()
    })
    .unwrap()
}

fn sample_idea(id: u64) -> IdeaData {
    let mut idea = IdeaData {
        id,
        idea_id: id,
        itinerary_name: "Coastal walk".to_string(),
        attraction_name: "Seal colony".to_string(),
        wild_mode: "slow".to_string(),
        attraction_location: "Hualien".to_string(),
        experience_duration: 3.0,
        ..Default::default()
    };
    idea.set_tags(["hiking", "sea"]);
    idea
}

// ============================================================================
// Backend Configuration Tests (no server required)
// ============================================================================

#[test]
fn test_backend_creation() {
    let backend = ManticoreBackend::new(ManticoreConfig::default()).unwrap();
    assert_eq!(backend.kind(), BackendKind::Manticore);
    assert_eq!(backend.name(), "manticore");
    assert_eq!(backend.backend_name(), "manticore");
    assert_eq!(backend.index(), "idea");
}

#[test]
fn test_config_serialization() {
    let config = ManticoreConfig {
        url: "http://search:9308".to_string(),
        index: "ideas_v2".to_string(),
        ..Default::default()
    };
    let json = serde_json::to_string(&config).unwrap();
    let deserialized: ManticoreConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(deserialized, config);
}

// ============================================================================
// Search Tests
// ============================================================================

#[tokio::test]
async fn test_search_sends_compiled_query() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/search")
        .match_body(Matcher::PartialJson(json!({
            "index": "idea",
            "query": {"bool": {"must": [
                {"match": {"*": {"query": "camping", "operator": "and"}}},
                {"bool": {"should": [
                    {"range": {"experience_duration": {"gte": 2.0, "lte": 4.0}}}
                ]}}
            ]}},
            "sort": [{"id": "asc"}],
            "options": {"scroll": true},
            "limit": 8
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "took": 0,
                "timed_out": false,
                "hits": {
                    "total": 1,
                    "hits": [{"_id": 7, "_score": 1, "_source": {
                        "idea_id": 7,
                        "itinerary_name": "Camp night",
                        "attraction_name": "Pine ridge",
                        "tags": "camping,stars",
                        "wild_mode": "slow",
                        "attraction_location": "Nantou",
                        "experience_duration": 3
                    }}]
                },
                "scroll": "dG9rZW4="
            })
            .to_string(),
        )
        .create_async()
        .await;

    let backend = backend_for(&server.url());
    let filters = vec![
        Filter::new("keyword", "camping"),
        Filter::new("experience_hours", "[2,4]"),
    ];
    let response = backend
        .search(&filters, &PageRequest::default())
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(response.total, 1);
    assert_eq!(response.items.len(), 1);
    assert_eq!(response.items[0].id, 7);
    assert_eq!(response.items[0].tags, vec!["camping", "stars"]);
    assert_eq!(response.next_scroll_token.as_deref(), Some("dG9rZW4="));
}

#[tokio::test]
async fn test_search_continuation_forwards_token() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/search")
        .match_body(Matcher::PartialJson(json!({
            "options": {"scroll": "dG9rZW4="}
        })))
        .with_status(200)
        .with_body(json!({"hits": {"total": 9, "hits": []}, "scroll": "dG9rZW4="}).to_string())
        .create_async()
        .await;

    let backend = backend_for(&server.url());
    let page = PageRequest::new(8).with_scroll_token("dG9rZW4=");
    let response = backend.search(&[], &page).await.unwrap();

    mock.assert_async().await;
    assert!(response.items.is_empty());
    assert_eq!(response.total, 9);
    assert!(response.next_scroll_token.is_none());
}

#[tokio::test]
async fn test_search_unknown_field_sends_nothing() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/search")
        .expect(0)
        .create_async()
        .await;

    let backend = backend_for(&server.url());
    let err = backend
        .search(&[Filter::new("bogus", "x")], &PageRequest::default())
        .await
        .unwrap_err();

    mock.assert_async().await;
    assert!(matches!(
        err,
        StorageError::Search(SearchError::UnknownField { ref key }) if key == "bogus"
    ));
}

#[tokio::test]
async fn test_search_backend_error_is_query_error() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/search")
        .with_status(500)
        .with_body(r#"{"error":"unknown local index 'idea' in search request"}"#)
        .create_async()
        .await;

    let backend = backend_for(&server.url());
    let err = backend
        .search(&[], &PageRequest::default())
        .await
        .unwrap_err();

    match err {
        StorageError::Backend(BackendError::QueryError { status, message }) => {
            assert_eq!(status, 500);
            assert!(message.contains("unknown local index"));
        }
        other => panic!("expected query error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_search_invalid_json_is_serialization_error() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/search")
        .with_status(200)
        .with_body("not json")
        .create_async()
        .await;

    let backend = backend_for(&server.url());
    let err = backend
        .search(&[], &PageRequest::default())
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        StorageError::Backend(BackendError::SerializationError { .. })
    ));
}

#[tokio::test]
async fn test_unreachable_backend_is_unavailable() {
    let backend = backend_for("http://127.0.0.1:1");
    let err = backend
        .search(&[], &PageRequest::default())
        .await
        .unwrap_err();
    match err {
        StorageError::Backend(e) => assert!(e.is_unavailable(), "got {:?}", e),
        other => panic!("expected backend error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_search_deadline_is_timeout() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/search")
        .with_status(200)
        .with_chunked_body(|w| {
            std::thread::sleep(Duration::from_millis(1500));
            w.write_all(br#"{"hits": {"total": 0, "hits": []}}"#)
        })
        .create_async()
        .await;

    let backend = backend_for(&server.url());
    let page = PageRequest::default().with_timeout(Duration::from_millis(100));
    let err = backend.search(&[], &page).await.unwrap_err();
    match err {
        StorageError::Backend(e) => {
            assert!(matches!(e, BackendError::Timeout { .. }), "got {:?}", e);
            assert!(e.is_unavailable());
        }
        other => panic!("expected backend error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_search_through_path_prefix() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/manticore/search")
        .with_status(200)
        .with_body(json!({"hits": {"total": 0, "hits": []}}).to_string())
        .create_async()
        .await;

    let backend = backend_for(&format!("{}/manticore", server.url()));
    let response = backend
        .search(&[], &PageRequest::default())
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(response.total, 0);
}

// ============================================================================
// Write Tests
// ============================================================================

#[tokio::test]
async fn test_create_inserts_document() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/insert")
        .match_body(Matcher::PartialJson(json!({
            "index": "idea",
            "id": 12,
            "doc": {
                "idea_id": 12,
                "itinerary_name": "Coastal walk",
                "tags": "hiking,sea",
                "wild_mode": "slow"
            }
        })))
        .with_status(200)
        .with_body(r#"{"_index":"idea","_id":12,"created":true,"result":"created","status":201}"#)
        .create_async()
        .await;

    let backend = backend_for(&server.url());
    let id = backend.create(&sample_idea(12)).await.unwrap();

    mock.assert_async().await;
    assert_eq!(id, 12);
}

#[tokio::test]
async fn test_replace_sends_full_document() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/replace")
        .match_body(Matcher::PartialJson(json!({
            "index": "idea",
            "id": 12,
            "doc": {"attraction_location": "Hualien"}
        })))
        .with_status(200)
        .with_body(r#"{"_index":"idea","_id":12,"created":false,"result":"updated","status":200}"#)
        .create_async()
        .await;

    let backend = backend_for(&server.url());
    backend.replace(12, &sample_idea(12)).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_delete_existing() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/delete")
        .match_body(Matcher::Json(json!({"index": "idea", "id": 12})))
        .with_status(200)
        .with_body(r#"{"_index":"idea","_id":12,"found":true,"result":"deleted"}"#)
        .create_async()
        .await;

    let backend = backend_for(&server.url());
    backend.delete(12).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_delete_missing_is_not_found() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/delete")
        .with_status(200)
        .with_body(r#"{"_index":"idea","_id":99,"found":false,"result":"not found"}"#)
        .create_async()
        .await;

    let backend = backend_for(&server.url());
    let err = backend.delete(99).await.unwrap_err();
    assert!(matches!(
        err,
        StorageError::Resource(ResourceError::NotFound { id: 99, .. })
    ));
}

// ============================================================================
// Health Tests
// ============================================================================

#[tokio::test]
async fn test_health_check_ok() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/sql")
        .match_query(Matcher::UrlEncoded("mode".into(), "raw".into()))
        .match_body(Matcher::UrlEncoded("query".into(), "SHOW STATUS".into()))
        .with_status(200)
        .with_body(r#"[{"columns":[],"data":[],"total":0}]"#)
        .create_async()
        .await;

    let backend = backend_for(&server.url());
    backend.health_check().await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_health_check_failure_is_unavailable() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/sql")
        .match_query(Matcher::Any)
        .with_status(503)
        .create_async()
        .await;

    let backend = backend_for(&server.url());
    let err = backend.health_check().await.unwrap_err();
    assert!(matches!(err, BackendError::Unavailable { .. }));
}
