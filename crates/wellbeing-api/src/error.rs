//! API error types and JSON error response formatting.
//!
//! ApiError provides a consistent JSON error body across all endpoints,
//! mapping internal errors to HTTP status codes.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use wellbeing_core::WellbeingError;

/// JSON error response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Machine-readable error code (e.g., "bad_request", "not_found").
    pub error: String,
    /// Human-readable error message.
    pub message: String,
}

/// API error type that maps to HTTP status codes and JSON responses.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// 400 Bad Request - request body that is not valid JSON for the endpoint.
    #[error("bad request: {0}")]
    BadRequest(String),
    /// 404 Not Found - unknown session.
    #[error("not found: {0}")]
    NotFound(String),
    /// 500 Internal Server Error - unexpected server error.
    #[error("internal error: {0}")]
    Internal(String),
    /// 503 Service Unavailable - session capacity exhausted.
    #[error("service unavailable: {0}")]
    ServiceUnavailable(String),
}

impl ApiError {
    fn parts(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request"),
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
            ApiError::ServiceUnavailable(_) => {
                (StatusCode::SERVICE_UNAVAILABLE, "service_unavailable")
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code) = self.parts();
        let message = match self {
            ApiError::BadRequest(msg)
            | ApiError::NotFound(msg)
            | ApiError::Internal(msg)
            | ApiError::ServiceUnavailable(msg) => msg,
        };

        if status.is_server_error() {
            tracing::warn!(status = %status, message = %message, "Request failed");
        }

        let body = ErrorBody {
            error: error_code.to_string(),
            message,
        };

        (status, Json(body)).into_response()
    }
}

impl From<WellbeingError> for ApiError {
    fn from(err: WellbeingError) -> Self {
        match &err {
            WellbeingError::SessionLimit { .. } => ApiError::ServiceUnavailable(err.to_string()),
            _ => ApiError::Internal(err.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}
