use axum::body::Body;
use axum::http::{Request, StatusCode};
use httpmock::prelude::*;
use property_watch::app::scan_api;
use property_watch::{
    HtmlListingExtractor, ScanConfig, ScanWorker, SelectorSet, StoreConfig, SupabaseStore,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

const LISTINGS_PAGE: &str = r#"
<html><body>
  <div class="search-result">
    <h2 class="search-result__header-title">Main St 1</h2>
    <span class="search-result-price">€ 450.000 k.k.</span>
  </div>
  <div class="search-result">
    <h2 class="search-result__header-title">Main St 7</h2>
    <span class="label-status">Verkocht</span>
    <span class="search-result-price">€ 510.000 k.k.</span>
  </div>
</body></html>
"#;

/// The store and the listing site are both served by the same mock server.
fn worker_for(server: &MockServer) -> ScanWorker {
    let store = SupabaseStore::new(&StoreConfig {
        url: server.base_url(),
        key: "service-key".to_string(),
    });
    let config = ScanConfig {
        url_template: server.url("/koop/{city}/straat-{street}/"),
        ..ScanConfig::default()
    };
    let extractor = HtmlListingExtractor::new(&SelectorSet::default()).unwrap();
    ScanWorker::new(Arc::new(store), Arc::new(extractor), config)
}

async fn get_scan(worker: ScanWorker) -> (StatusCode, Value) {
    let response = scan_api::router(worker)
        .oneshot(Request::builder().uri("/scan").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_scan_with_empty_watchlist() {
    let server = MockServer::start_async().await;
    let watchlist_mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/rest/v1/watchlist");
            then.status(200).json_body(json!([]));
        })
        .await;
    let page_mock = server
        .mock_async(|when, then| {
            when.method(GET).path_contains("/koop/");
            then.status(200).body(LISTINGS_PAGE);
        })
        .await;
    let insert_mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/rest/v1/scan_results");
            then.status(201).json_body(json!([]));
        })
        .await;

    let (status, body) = get_scan(worker_for(&server)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Scan completed successfully"}));
    watchlist_mock.assert_async().await;
    assert_eq!(page_mock.hits_async().await, 0);
    assert_eq!(insert_mock.hits_async().await, 0);
}

#[tokio::test]
async fn test_scan_skips_failing_page_and_inserts_the_rest() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/rest/v1/watchlist");
            then.status(200).json_body(json!([
                {"id": 11, "street_name": "Main St", "city_name": "Amsterdam"},
                {"id": 12, "street_name": "Oudegracht", "city_name": "Utrecht"}
            ]));
        })
        .await;
    let good_page = server
        .mock_async(|when, then| {
            when.method(GET).path("/koop/Amsterdam/straat-Main-St/");
            then.status(200).body(LISTINGS_PAGE);
        })
        .await;
    let bad_page = server
        .mock_async(|when, then| {
            when.method(GET).path("/koop/Utrecht/straat-Oudegracht/");
            then.status(500);
        })
        .await;
    let insert_mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/rest/v1/scan_results")
                .header("apikey", "service-key")
                .body_contains("\"watchlist_id\":11")
                .body_contains("\"status\":\"Available\"")
                .body_contains("\"status\":\"Verkocht\"");
            then.status(201).json_body(json!([]));
        })
        .await;

    let (status, body) = get_scan(worker_for(&server)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Scan completed successfully");
    good_page.assert_async().await;
    bad_page.assert_async().await;
    insert_mock.assert_async().await;
}

#[tokio::test]
async fn test_scan_fails_when_watchlist_unavailable() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/rest/v1/watchlist");
            then.status(503);
        })
        .await;

    let (status, body) = get_scan(worker_for(&server)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["detail"], "Failed to retrieve watchlist entries");
}

#[tokio::test]
async fn test_scan_fails_when_insert_rejected() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/rest/v1/watchlist");
            then.status(200).json_body(json!([
                {"id": 1, "street_name": "Main St", "city_name": "Amsterdam"}
            ]));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/koop/Amsterdam/straat-Main-St/");
            then.status(200).body(LISTINGS_PAGE);
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/rest/v1/scan_results");
            then.status(400).json_body(json!({"message": "column does not exist"}));
        })
        .await;

    let (status, body) = get_scan(worker_for(&server)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["detail"], "Failed to store scan results");
}
