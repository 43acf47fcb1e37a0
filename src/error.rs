//! Error handling module
//!
//! Centralized error types and HTTP response conversion.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::auth::TokenError;
use crate::domain::DomainError;
use crate::store::StoreError;

/// Application-wide Result type
pub type AppResult<T> = Result<T, AppError>;

/// Application error types
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Client errors (4xx)
    #[error("Invalid request body: {0}")]
    MalformedBody(#[from] JsonRejection),

    #[error("User already exists")]
    UserExists,

    #[error("Invalid user")]
    InvalidUser,

    #[error("Invalid Password")]
    InvalidPassword,

    #[error("Missing required token")]
    MissingToken,

    #[error("Invalid JWT Token")]
    InvalidToken,

    #[error("Transaction not found")]
    TransactionNotFound(String),

    // Domain errors
    #[error(transparent)]
    Domain(#[from] DomainError),

    // Server errors (5xx)
    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<TokenError> for AppError {
    fn from(err: TokenError) -> Self {
        AppError::Internal(err.to_string())
    }
}

/// Error response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error_msg: String,
    pub error_code: String,
}

impl AppError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            // 400 Bad Request
            AppError::MalformedBody(_) => (StatusCode::BAD_REQUEST, "invalid_request"),
            AppError::UserExists => (StatusCode::BAD_REQUEST, "user_exists"),
            AppError::InvalidUser => (StatusCode::BAD_REQUEST, "invalid_user"),
            AppError::InvalidPassword => (StatusCode::BAD_REQUEST, "invalid_password"),
            AppError::InvalidToken => (StatusCode::BAD_REQUEST, "invalid_token"),

            // 401 Unauthorized
            AppError::MissingToken => (StatusCode::UNAUTHORIZED, "missing_token"),

            // 404 Not Found
            AppError::TransactionNotFound(_) => (StatusCode::NOT_FOUND, "transaction_not_found"),

            AppError::Domain(e) if e.is_client_error() => (StatusCode::BAD_REQUEST, e.code()),
            AppError::Domain(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),

            // 500 Internal Server Error
            AppError::Storage(_) => (StatusCode::INTERNAL_SERVER_ERROR, "storage_error"),
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_code) = self.status_and_code();

        let error_msg = if status.is_server_error() {
            tracing::error!(error = ?self, "Request failed");
            "An internal error occurred".to_string()
        } else {
            self.to_string()
        };

        let body = ErrorResponse {
            error_msg,
            error_code: error_code.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
