use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, Query, State};
use bookstall_core::CatalogItem;

use crate::AppState;
use crate::api_error::ApiError;
use crate::query_types::ListingQuery;

/// Subject shelf; `q` is the subject name.
pub async fn list_shelf(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListingQuery>,
) -> Result<Json<Vec<CatalogItem>>, ApiError> {
    let options = query.options()?;
    Ok(Json(state.catalog_service.shelf(&query.q, options).await))
}

pub async fn search_books(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListingQuery>,
) -> Result<Json<Vec<CatalogItem>>, ApiError> {
    let options = query.options()?;
    Ok(Json(state.catalog_service.search(&query.q, options).await))
}

pub async fn author_books(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Json<Vec<CatalogItem>> {
    Json(state.catalog_service.author_books(&name).await)
}
