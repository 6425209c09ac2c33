//! API error types and JSON error response formatting.
//!
//! `ApiError` gives every endpoint the same `{ error, message }` error body
//! and maps engine errors to HTTP status codes. An upstream failure is a
//! 502 — the caller can't do anything about it, but it isn't this
//! service's bug either.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use lingo_engine::TutorError;

/// JSON error response body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Machine-readable error code (e.g., "not_found").
    pub error: String,
    /// Human-readable error message.
    pub message: String,
}

/// API error type that maps to HTTP status codes and JSON responses.
#[derive(Debug)]
pub enum ApiError {
    /// 404 Not Found - unknown or ended session.
    NotFound(String),
    /// 502 Bad Gateway - the generative client failed.
    Upstream(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg),
            ApiError::Upstream(msg) => (StatusCode::BAD_GATEWAY, "upstream_error", msg),
        };

        let body = ErrorBody {
            error: error_code.to_string(),
            message,
        };

        (status, Json(body)).into_response()
    }
}

impl From<TutorError> for ApiError {
    fn from(err: TutorError) -> Self {
        match err {
            TutorError::SessionNotFound => ApiError::NotFound("Session not found".to_string()),
            TutorError::Upstream(e) => {
                tracing::error!(error = %e, "generation failed");
                // Keep upstream details out of the client-facing body
                ApiError::Upstream("Failed to generate a response".to_string())
            }
        }
    }
}
