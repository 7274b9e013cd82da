//! Tests for catalog pagination.

use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::error::SyncError;
use crate::ozon::OzonClient;

fn client_with_mock(mock_uri: &str) -> OzonClient {
    OzonClient::with_base_url(mock_uri, "client-1".to_string(), "secret".to_string())
}

fn page(offer_ids: &[&str], total: usize, last_id: &str) -> serde_json::Value {
    let items: Vec<_> = offer_ids
        .iter()
        .enumerate()
        .map(|(i, id)| serde_json::json!({ "product_id": i as u64 + 1, "offer_id": id }))
        .collect();
    serde_json::json!({
        "result": { "items": items, "total": total, "last_id": last_id }
    })
}

#[tokio::test]
async fn single_page_catalog() {
    let mock_server = MockServer::start().await;
    let client = client_with_mock(&mock_server.uri());

    Mock::given(method("POST"))
        .and(path("/v2/product/list"))
        .and(header("Client-Id", "client-1"))
        .and(header("Api-Key", "secret"))
        .and(body_partial_json(serde_json::json!({
            "filter": { "visibility": "ALL" },
            "last_id": "",
            "limit": 1000
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(&["A", "B"], 2, "cur-1")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let ids = client.fetch_offer_ids().await.unwrap();
    assert_eq!(ids, vec!["A", "B"]);
}

#[tokio::test]
async fn follows_cursor_until_total() {
    let mock_server = MockServer::start().await;
    let client = client_with_mock(&mock_server.uri());

    Mock::given(method("POST"))
        .and(path("/v2/product/list"))
        .and(body_partial_json(serde_json::json!({ "last_id": "" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(&["A", "B"], 3, "cur-1")))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/v2/product/list"))
        .and(body_partial_json(serde_json::json!({ "last_id": "cur-1" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(&["C"], 3, "cur-2")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let ids = client.fetch_offer_ids().await.unwrap();
    assert_eq!(ids, vec!["A", "B", "C"]);
}

#[tokio::test]
async fn empty_catalog() {
    let mock_server = MockServer::start().await;
    let client = client_with_mock(&mock_server.uri());

    Mock::given(method("POST"))
        .and(path("/v2/product/list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(&[], 0, "")))
        .expect(1)
        .mount(&mock_server)
        .await;

    assert!(client.fetch_offer_ids().await.unwrap().is_empty());
}

#[tokio::test]
async fn empty_page_before_total_stops() {
    let mock_server = MockServer::start().await;
    let client = client_with_mock(&mock_server.uri());

    Mock::given(method("POST"))
        .and(path("/v2/product/list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(&[], 5, "")))
        .expect(1)
        .mount(&mock_server)
        .await;

    assert!(client.fetch_offer_ids().await.unwrap().is_empty());
}

#[tokio::test]
async fn runaway_pagination_is_bounded() {
    let mock_server = MockServer::start().await;
    let mut client = client_with_mock(&mock_server.uri());
    client.max_pages = 3;

    // Total never reached: each page repeats one item of a million.
    Mock::given(method("POST"))
        .and(path("/v2/product/list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(&["A"], 1_000_000, "next")))
        .expect(3)
        .mount(&mock_server)
        .await;

    let err = client.fetch_offer_ids().await.unwrap_err();
    assert!(matches!(err, SyncError::PaginationLimit { pages: 3 }));
}

#[tokio::test]
async fn http_error_propagates() {
    let mock_server = MockServer::start().await;
    let client = client_with_mock(&mock_server.uri());

    Mock::given(method("POST"))
        .and(path("/v2/product/list"))
        .respond_with(ResponseTemplate::new(403).set_body_string("invalid Api-Key"))
        .mount(&mock_server)
        .await;

    let err = client.fetch_offer_ids().await.unwrap_err();
    match err {
        SyncError::HttpStatus { status, body } => {
            assert_eq!(status.as_u16(), 403);
            assert_eq!(body, "invalid Api-Key");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn unexpected_shape_is_parse_error() {
    let mock_server = MockServer::start().await;
    let client = client_with_mock(&mock_server.uri());

    Mock::given(method("POST"))
        .and(path("/v2/product/list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "items": [] })))
        .mount(&mock_server)
        .await;

    let err = client.fetch_offer_ids().await.unwrap_err();
    assert!(matches!(err, SyncError::Json(_)));
}
