//! HTTP API server for bookstall.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::min_ident_chars, reason = "Short closure params are idiomatic")]
#![allow(clippy::single_call_fn, reason = "Helper functions improve readability")]
#![allow(missing_debug_implementations, reason = "Internal types")]

pub mod api_error;
mod handlers;
mod query_types;
mod response_types;


use std::sync::Arc;
use std::time::Duration;

use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use bookstall_service::{AttributeService, BookService, CatalogService};

pub use response_types::{ReadinessResponse, VersionResponse};

/// Shared application state for all HTTP handlers.
pub struct AppState {
    /// Synthetic price, rating and likes
    pub attribute_service: Arc<AttributeService>,
    /// Normalized catalog listings
    pub catalog_service: Arc<CatalogService>,
    /// Detail view composition
    pub book_service: Arc<BookService>,
    /// Active storage backend name, reported by `/api/version`
    pub storage_kind: &'static str,
}

impl AppState {
    #[must_use]
    pub fn new(
        attribute_service: Arc<AttributeService>,
        catalog_service: Arc<CatalogService>,
        storage_kind: &'static str,
    ) -> Self {
        let book_service = Arc::new(BookService::new(
            Arc::clone(&attribute_service),
            Arc::clone(&catalog_service),
        ));
        Self { attribute_service, catalog_service, book_service, storage_kind }
    }
}

pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route("/health", get(health))
        .route("/api/readiness", get(readiness))
        .route("/api/version", get(version))
        .route("/api/books", get(handlers::catalog::list_shelf))
        .route("/api/search", get(handlers::catalog::search_books))
        .route("/api/authors/{name}/books", get(handlers::catalog::author_books))
        .route("/api/books/{id}", get(handlers::books::book_detail))
        .route("/api/books/{id}/attributes", get(handlers::books::get_attributes))
        .route(
            "/api/books/{id}/like",
            post(handlers::books::like_book).delete(handlers::books::unlike_book),
        )
        .route("/api/books/{id}/unlike", post(handlers::books::unlike_book))
        .route("/books-detail/{id}", get(handlers::books::legacy_book_price))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

async fn readiness() -> (StatusCode, Json<ReadinessResponse>) {
    (StatusCode::OK, Json(ReadinessResponse { status: "ready", message: None }))
}

async fn version(
    axum::extract::State(state): axum::extract::State<Arc<AppState>>,
) -> Json<VersionResponse> {
    Json(VersionResponse {
        version: env!("CARGO_PKG_VERSION"),
        storage: state.storage_kind,
        catalog_configured: state.catalog_service.is_configured(),
    })
}
