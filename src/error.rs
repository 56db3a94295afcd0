//! Application error type and its HTTP mapping.
//!
//! Every failure surfaced by the services is one of four kinds. Handlers
//! return [`AppError`] directly and rely on its [`IntoResponse`]
//! implementation to produce a `{"error": "..."}` JSON body.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// JSON body returned for every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Errors produced by the allocator, lookup service and storage layer.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Malformed or missing request payload, or a URL that fails validation.
    #[error("{0}")]
    InvalidInput(String),

    /// The requested short code has never been issued.
    #[error("{0}")]
    NotFound(String),

    /// Every generated candidate collided with an existing short code.
    #[error("Failed to allocate a unique short code after {attempts} attempts")]
    AllocationExhausted { attempts: u32 },

    /// The store could not be reached or the statement failed.
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),
}

impl AppError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::StorageUnavailable(message.into())
    }

    /// HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::AllocationExhausted { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::StorageUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    /// Message exposed to API clients.
    ///
    /// Server-side failures get a fixed message; the detail stays in the logs.
    pub fn public_message(&self) -> String {
        match self {
            AppError::InvalidInput(message) | AppError::NotFound(message) => message.clone(),
            AppError::AllocationExhausted { .. } => {
                "Failed to allocate a unique short code".to_string()
            }
            AppError::StorageUnavailable(_) => "Storage temporarily unavailable".to_string(),
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        AppError::StorageUnavailable(e.to_string())
    }
}

impl From<sqlx::migrate::MigrateError> for AppError {
    fn from(e: sqlx::migrate::MigrateError) -> Self {
        AppError::StorageUnavailable(e.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        let body = ErrorBody {
            error: self.public_message(),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::invalid_input("bad").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::not_found("missing").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::AllocationExhausted { attempts: 5 }.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::storage("down").status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[test]
    fn test_client_errors_expose_message() {
        let err = AppError::invalid_input("Missing 'url' parameter");
        assert_eq!(err.public_message(), "Missing 'url' parameter");
        assert_eq!(err.to_string(), "Missing 'url' parameter");
    }

    #[test]
    fn test_server_errors_hide_detail() {
        let err = AppError::storage("connection refused (os error 111)");
        assert_eq!(err.public_message(), "Storage temporarily unavailable");
        assert!(err.to_string().contains("connection refused"));

        let err = AppError::AllocationExhausted { attempts: 3 };
        assert!(err.to_string().contains("3 attempts"));
        assert!(!err.public_message().contains('3'));
    }
}
