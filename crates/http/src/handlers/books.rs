use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use bookstall_core::SyntheticAttributeRecord;
use bookstall_service::BookDetail;

use crate::AppState;
use crate::api_error::ApiError;
use crate::query_types::LikeRequest;
use crate::response_types::LegacyPriceResponse;

pub async fn book_detail(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<BookDetail>, ApiError> {
    Ok(Json(state.book_service.detail(&id).await?))
}

pub async fn get_attributes(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<SyntheticAttributeRecord>, ApiError> {
    Ok(Json(state.attribute_service.get_or_create(&id).await?))
}

pub async fn legacy_book_price(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<LegacyPriceResponse>, ApiError> {
    let record = state.attribute_service.get_or_create(&id).await?;
    Ok(Json(LegacyPriceResponse { book_id: record.id, price: record.price }))
}

pub async fn like_book(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    payload: Result<Json<LikeRequest>, JsonRejection>,
) -> Result<Json<SyntheticAttributeRecord>, ApiError> {
    let Json(req) = payload?;
    Ok(Json(state.attribute_service.like(&id, &req.user_id).await?))
}

/// 200 with the record, or 204 when the book has no attributes yet.
pub async fn unlike_book(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    payload: Result<Json<LikeRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(req) = payload?;
    match state.attribute_service.unlike(&id, &req.user_id).await? {
        Some(record) => Ok(Json(record).into_response()),
        None => Ok(StatusCode::NO_CONTENT.into_response()),
    }
}
