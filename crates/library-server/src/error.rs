//! API error types with JSON responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use library_core::ValidationFailure;
use serde::Serialize;

/// API error that can be returned from handlers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Field validation failed (400). Rendered as the bare failure list.
    #[error("validation failed on {} field(s)", .0.len())]
    Validation(Vec<ValidationFailure>),

    /// Not found (404).
    #[error("not found: {0}")]
    NotFound(String),

    /// Store error.
    #[error("storage error: {0}")]
    Store(#[from] library_store::StoreError),
}

impl ApiError {
    /// Get the error code string for this error.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_FAILED",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Store(_) => "STORAGE_ERROR",
        }
    }

    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// JSON error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error details.
    pub error: ErrorDetails,
}

/// Error details within the response.
#[derive(Debug, Serialize)]
pub struct ErrorDetails {
    /// Error code (e.g., "NOT_FOUND", "STORAGE_ERROR").
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        match self {
            Self::Validation(failures) => (status, Json(failures)).into_response(),
            other => {
                let body = ErrorResponse {
                    error: ErrorDetails {
                        code: other.code().to_string(),
                        message: other.to_string(),
                    },
                };
                (status, Json(body)).into_response()
            }
        }
    }
}

/// Result type for API handlers.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::Validation(vec![]).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::NotFound("x".into()).status_code(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_store_error_is_server_error() {
        let err: ApiError =
            library_store::StoreError::MigrationError("boom".to_string()).into();
        assert_eq!(err.code(), "STORAGE_ERROR");
        assert!(err.status_code().is_server_error());
    }

    #[test]
    fn test_error_response_serialize() {
        let body = ErrorResponse {
            error: ErrorDetails {
                code: "NOT_FOUND".to_string(),
                message: "not found: book 123".to_string(),
            },
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["error"]["code"], "NOT_FOUND");
        assert_eq!(json["error"]["message"], "not found: book 123");
    }
}
