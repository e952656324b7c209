//! Pagination and failure behaviour of complete fetches.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use super::common::{client, features_body, layer_url, serve, LAYER_PATH};
use arcgis_query::feature::{Paging, Termination};
use arcgis_query::FeatureQuery;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

#[tokio::test]
async fn test_13000_features_in_three_pages() {
    let server = MockServer::start().await;

    for (offset, count) in [(0usize, 5000usize), (5000, 5000), (10000, 3000)] {
        let body = features_body((offset..offset + count).map(|id| json!({"OBJECTID": id})));
        Mock::given(method("GET"))
            .and(path(LAYER_PATH))
            .and(query_param("resultOffset", offset.to_string()))
            .and(query_param("resultRecordCount", "5000"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .expect(1)
            .mount(&server)
            .await;
    }

    let result = client()
        .fetch(&FeatureQuery::new(layer_url(&server)).with_paging(Paging::ResultOffset))
        .await
        .expect("Paginated fetch should succeed");

    assert_eq!(result.len(), 13000);
    let records = result.records();
    assert_eq!(records[0].get_i64("OBJECTID"), Some(0));
    assert_eq!(records[12999].get_i64("OBJECTID"), Some(12999));
}

#[tokio::test]
async fn test_default_paging_sends_identical_requests() {
    let server = MockServer::start().await;
    let queries = Arc::new(std::sync::Mutex::new(Vec::<String>::new()));
    let calls = Arc::new(AtomicUsize::new(0));

    let seen = queries.clone();
    let counter = calls.clone();
    Mock::given(method("GET"))
        .and(path(LAYER_PATH))
        .respond_with(move |req: &Request| {
            seen.lock().unwrap().push(req.url.query().unwrap_or_default().to_string());
            let call = counter.fetch_add(1, Ordering::SeqCst);
            let count = if call == 0 { 2 } else { 1 };
            ResponseTemplate::new(200).set_body_json(features_body(
                (0..count).map(|id| json!({"OBJECTID": call * 10 + id})),
            ))
        })
        .mount(&server)
        .await;

    let result = client()
        .fetch(&FeatureQuery::new(layer_url(&server)).with_batch_size(2))
        .await
        .expect("Default paging fetch should succeed");

    assert_eq!(calls.load(Ordering::SeqCst), 2);
    assert_eq!(result.len(), 3);

    let queries = queries.lock().unwrap();
    assert_eq!(queries[0], queries[1]);
    assert!(!queries[0].contains("resultOffset"));
}

#[tokio::test]
async fn test_transfer_limit_follows_server_cap() {
    let server = MockServer::start().await;

    let pages = [(0usize, 1000usize, true), (1000, 1000, true), (2000, 500, false)];
    for (offset, count, more) in pages {
        let ids = offset..offset + count;
        let mut body = features_body(ids.map(|id| json!({"OBJECTID": id})));
        body["exceededTransferLimit"] = json!(more);
        Mock::given(method("GET"))
            .and(path(LAYER_PATH))
            .and(query_param("resultOffset", offset.to_string()))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .expect(1)
            .mount(&server)
            .await;
    }

    let result = client()
        .fetch(
            &FeatureQuery::new(layer_url(&server))
                .with_paging(Paging::ResultOffset)
                .with_termination(Termination::TransferLimit),
        )
        .await
        .expect("Transfer-limit fetch should succeed");

    assert_eq!(result.len(), 2500);
}

#[tokio::test]
async fn test_error_envelope_reports_redacted_url() {
    let server = MockServer::start().await;
    serve(
        &server,
        json!({"error": {"code": 498, "message": "Invalid Token", "details": []}}),
    )
    .await;

    let err = client()
        .fetch(&FeatureQuery::new(layer_url(&server)).param("token", "abc123"))
        .await
        .expect_err("Service error should fail the fetch");

    assert!(err.is_upstream_query());
    let url = err.request_url().expect("Error should carry the request URL");
    assert!(url.contains(LAYER_PATH));
    assert!(!url.contains("abc123"));
}

#[tokio::test]
async fn test_server_error_is_transport() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(LAYER_PATH))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = client()
        .fetch(&FeatureQuery::new(layer_url(&server)))
        .await
        .expect_err("HTTP 500 should fail the fetch");

    assert!(err.is_transport());
}

#[tokio::test]
async fn test_empty_dataset() {
    let server = MockServer::start().await;
    serve(&server, features_body([])).await;

    let err = client()
        .fetch(&FeatureQuery::new(layer_url(&server)).filter(("GEMEINDE", "=", "Nowhere")))
        .await
        .expect_err("Empty dataset should fail the fetch");

    assert!(err.is_empty_result());
}
