#![expect(clippy::unwrap_used, reason = "test code")]

use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::api_types::OrderBy;
use crate::client::{GoogleBooksClient, truncate};
use crate::error::CatalogError;

fn volume_json(id: &str, title: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "volumeInfo": {
            "title": title,
            "authors": ["Ursula K. Le Guin"],
            "pageCount": 120,
            "imageLinks": {"thumbnail": format!("http://img/{id}")}
        }
    })
}

#[tokio::test]
async fn search_sends_query_parameters_and_narrows_items() {
    let server = MockServer::start().await;
    let client = GoogleBooksClient::new(&server.uri(), Some("secret".to_owned())).unwrap();

    Mock::given(method("GET"))
        .and(path("/volumes"))
        .and(query_param("q", "subject:fantasy"))
        .and(query_param("orderBy", "newest"))
        .and(query_param("maxResults", "10"))
        .and(query_param("key", "secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "kind": "books#volumes",
            "totalItems": 3,
            "items": [
                volume_json("a", "A Wizard of Earthsea"),
                {"id": "broken"},
                volume_json("b", "The Tombs of Atuan")
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let items = client.search("subject:fantasy", OrderBy::Newest, 10).await.unwrap();
    let ids: Vec<&str> = items.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, ["a", "b"]);
}

#[tokio::test]
async fn search_without_items_is_empty() {
    let server = MockServer::start().await;
    let client = GoogleBooksClient::new(&server.uri(), None).unwrap();

    Mock::given(method("GET"))
        .and(path("/volumes"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"kind": "books#volumes", "totalItems": 0})),
        )
        .mount(&server)
        .await;

    let items = client.search("nothing", OrderBy::Relevance, 20).await.unwrap();
    assert!(items.is_empty());
}

#[tokio::test]
async fn search_clamps_max_results() {
    let server = MockServer::start().await;
    let client = GoogleBooksClient::new(&server.uri(), None).unwrap();

    Mock::given(method("GET"))
        .and(path("/volumes"))
        .and(query_param("maxResults", "40"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(1)
        .mount(&server)
        .await;

    client.search("rust", OrderBy::Relevance, 500).await.unwrap();
}

#[tokio::test]
async fn search_maps_error_status() {
    let server = MockServer::start().await;
    let client = GoogleBooksClient::new(&server.uri(), None).unwrap();

    Mock::given(method("GET"))
        .and(path("/volumes"))
        .respond_with(ResponseTemplate::new(429).set_body_string("Rate limit exceeded"))
        .mount(&server)
        .await;

    let err = client.search("rust", OrderBy::Relevance, 20).await.unwrap_err();
    match &err {
        CatalogError::HttpStatus { code, body } => {
            assert_eq!(*code, 429);
            assert_eq!(body, "Rate limit exceeded");
        },
        other => panic!("expected HttpStatus, got {other:?}"),
    }
    assert!(err.is_transient());
}

#[tokio::test]
async fn search_maps_malformed_body() {
    let server = MockServer::start().await;
    let client = GoogleBooksClient::new(&server.uri(), None).unwrap();

    Mock::given(method("GET"))
        .and(path("/volumes"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let err = client.search("rust", OrderBy::Relevance, 20).await.unwrap_err();
    assert!(matches!(err, CatalogError::JsonParse { .. }));
    assert!(!err.is_transient());
}

#[tokio::test]
async fn volume_returns_item() {
    let server = MockServer::start().await;
    let client = GoogleBooksClient::new(&server.uri(), None).unwrap();

    Mock::given(method("GET"))
        .and(path("/volumes/a"))
        .respond_with(ResponseTemplate::new(200).set_body_json(volume_json("a", "Earthsea")))
        .mount(&server)
        .await;

    let item = client.volume("a").await.unwrap().unwrap();
    assert_eq!(item.title, "Earthsea");
    assert_eq!(item.page_count, Some(120));
}

#[tokio::test]
async fn volume_not_found_is_none() {
    let server = MockServer::start().await;
    let client = GoogleBooksClient::new(&server.uri(), None).unwrap();

    Mock::given(method("GET"))
        .and(path("/volumes/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    assert!(client.volume("missing").await.unwrap().is_none());
}

#[tokio::test]
async fn volume_server_error_is_propagated() {
    let server = MockServer::start().await;
    let client = GoogleBooksClient::new(&server.uri(), None).unwrap();

    Mock::given(method("GET"))
        .and(path("/volumes/a"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = client.volume("a").await.unwrap_err();
    assert!(matches!(err, CatalogError::HttpStatus { code: 503, .. }));
}

#[tokio::test]
async fn volume_id_is_sent_as_one_path_segment() {
    let server = MockServer::start().await;
    let client = GoogleBooksClient::new(&format!("{}/books/v1/", server.uri()), None).unwrap();

    Mock::given(method("GET"))
        .and(path("/books/v1/volumes/a%2Fb%3Fq=x"))
        .respond_with(ResponseTemplate::new(200).set_body_json(volume_json("a/b?q=x", "Odd")))
        .expect(1)
        .mount(&server)
        .await;

    let item = client.volume("a/b?q=x").await.unwrap().unwrap();
    assert_eq!(item.title, "Odd");
}

#[test]
fn invalid_base_url_is_rejected() {
    let err = GoogleBooksClient::new("not a url", None).unwrap_err();
    assert!(matches!(err, CatalogError::ClientInit(_)));
}

#[test]
fn debug_masks_api_key() {
    let client = GoogleBooksClient::new("http://localhost/", Some("secret".to_owned())).unwrap();
    let debug = format!("{client:?}");
    assert!(!debug.contains("secret"));
    assert_eq!(client.base_url(), "http://localhost");
}

#[test]
fn truncate_respects_char_boundaries() {
    assert_eq!(truncate("héllo", 2), "h");
    assert_eq!(truncate("short", 10), "short");
}
