//! Typed API error for HTTP handlers.
//!
//! Converts service errors into HTTP responses with a JSON body
//! `{"error": "message"}` and a status code.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use bookstall_service::ServiceError;
use bookstall_storage::StorageError;

/// API error with HTTP status code and human-readable message.
///
/// `Internal` and `ServiceUnavailable` log the real error server-side and
/// return a static message to the client.
#[derive(Debug)]
pub enum ApiError {
    /// 400 Bad Request: invalid input from caller.
    BadRequest(String),
    /// 404 Not Found: requested resource doesn't exist.
    NotFound(String),
    /// 503 Service Unavailable: persistence layer failed.
    ServiceUnavailable(anyhow::Error),
    /// 500 Internal Server Error: unexpected failure. Details logged, not exposed.
    Internal(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            Self::ServiceUnavailable(err) => {
                tracing::error!(error = ?err, "storage unavailable");
                (StatusCode::SERVICE_UNAVAILABLE, "storage unavailable".to_owned())
            },
            Self::Internal(err) => {
                tracing::error!(error = ?err, "internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error".to_owned())
            },
        };
        let body = serde_json::json!({"error": message});
        (status, Json(body)).into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        if err.is_invalid_input() {
            return Self::BadRequest(err.to_string());
        }
        if err.is_upstream_unavailable() {
            return Self::ServiceUnavailable(err.into());
        }
        match err {
            ServiceError::Storage(StorageError::NotFound { entity, id }) => {
                Self::NotFound(format!("{entity} '{id}' not found"))
            },
            _ => Self::Internal(err.into()),
        }
    }
}
