//! Structured error types for API responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

/// Errors surfaced to API clients.
///
/// Each variant maps to an HTTP status; the body is always `{"error": message}`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request failed validation (400).
    #[error("{0}")]
    Validation(String),

    /// No todo matched the requested identifier (404).
    #[error("Todo not found")]
    NotFound,

    /// Reading or writing the data file failed (500).
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

impl ApiError {
    // Convenience constructors

    pub fn missing_text() -> Self {
        Self::Validation("Todo text is required".to_string())
    }

    /// HTTP status code for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Wire shape of an error response.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("request failed: {}", self);
        }
        (
            status,
            Json(ErrorBody {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

/// Result type for API handlers.
pub type ApiResult<T> = std::result::Result<T, ApiError>;
