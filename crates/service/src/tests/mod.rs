//! Test utilities for service tests backed by a temp-dir SQLite database.

use std::sync::Arc;

use bookstall_catalog::GoogleBooksClient;
use bookstall_storage::StorageBackend;
use tempfile::TempDir;
use wiremock::MockServer;

use crate::{AttributeService, CatalogService};

#[expect(clippy::unwrap_used, reason = "test code")]
pub fn create_test_backend() -> (Arc<StorageBackend>, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("test.db");
    let backend = StorageBackend::new_sqlite(&db_path).unwrap();
    (Arc::new(backend), temp_dir)
}

pub fn create_attribute_service() -> (AttributeService, TempDir) {
    let (backend, dir) = create_test_backend();
    (AttributeService::new(backend), dir)
}

#[expect(clippy::unwrap_used, reason = "test code")]
pub fn catalog_for(server: &MockServer) -> CatalogService {
    let client = GoogleBooksClient::new(&server.uri(), None).unwrap();
    CatalogService::new(Some(client), 20)
}

pub fn volume_json(id: &str, title: &str, authors: &[&str], pages: u32) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "volumeInfo": {
            "title": title,
            "authors": authors,
            "pageCount": pages,
            "imageLinks": {"thumbnail": format!("http://img/{id}")}
        }
    })
}
