//! Unified error handling for the REST surface.
//!
//! Provides a single error type that converts into an Axum HTTP response
//! carrying the `{code, message, data: {status}}` error body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use domain::DomainError;
use serde::Serialize;
use thiserror::Error;

/// Message used by the host platform for every failed permission check.
const NOT_ALLOWED_MESSAGE: &str = "Sorry, you are not allowed to do that.";

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    // Authentication & Authorization
    #[error("Unauthorized")]
    Unauthorized,

    #[error("Invalid or expired token")]
    InvalidToken,

    /// Anonymous caller on a permission-gated route
    #[error("{}", NOT_ALLOWED_MESSAGE)]
    LoginRequired,

    /// Authenticated caller lacking a capability
    #[error("{}", NOT_ALLOWED_MESSAGE)]
    Forbidden,

    #[cfg(feature = "jwt")]
    #[error("Authentication error")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    // Resource errors
    #[error("{0}")]
    NotFound(String),

    #[error("No route was found matching the URL and request method")]
    NoRoute,

    // Request errors
    #[error("Invalid request body: {0}")]
    BadRequest(String),

    #[error("{0}")]
    NotImplemented(String),

    // Collaborator failures
    #[error("{0}")]
    WriteFailed(String),

    // Internal
    #[error("Internal server error")]
    Internal(String),
}

/// Error response body, shaped like the host platform's REST errors.
#[derive(Debug, Serialize)]
struct ErrorResponse {
    code: &'static str,
    message: String,
    data: ErrorData,
}

#[derive(Debug, Serialize)]
struct ErrorData {
    status: u16,
}

impl AppError {
    /// Get error code for client
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Unauthorized | AppError::InvalidToken => "rest_unauthorized",
            #[cfg(feature = "jwt")]
            AppError::Jwt(_) => "rest_unauthorized",
            AppError::LoginRequired | AppError::Forbidden => "rest_forbidden",
            AppError::NotFound(_) => "rest_post_not_found",
            AppError::NoRoute => "rest_no_route",
            AppError::BadRequest(_) => "rest_invalid_body",
            AppError::NotImplemented(_) => "rest_not_implemented",
            AppError::WriteFailed(_) => "rest_internal_failure",
            AppError::Internal(_) => "rest_internal_error",
        }
    }

    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Unauthorized | AppError::InvalidToken | AppError::LoginRequired => {
                StatusCode::UNAUTHORIZED
            }
            #[cfg(feature = "jwt")]
            AppError::Jwt(_) => StatusCode::UNAUTHORIZED,
            AppError::Forbidden => StatusCode::FORBIDDEN,
            AppError::NotFound(_) | AppError::NoRoute => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotImplemented(_) => StatusCode::NOT_IMPLEMENTED,
            AppError::WriteFailed(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            #[cfg(feature = "jwt")]
            AppError::Jwt(e) => {
                tracing::warn!("JWT error: {:?}", e);
                "Invalid or expired token".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }

            _ => self.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorResponse {
            code: self.code(),
            message: self.user_message(),
            data: ErrorData {
                status: status.as_u16(),
            },
        };

        (status, Json(body)).into_response()
    }
}

// =============================================================================
// Domain Error Conversion
// =============================================================================

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::WriteFailed(msg) => AppError::WriteFailed(msg),
            DomainError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    fn ok_or_not_found(self, message: &str) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self, message: &str) -> AppResult<T> {
        self.ok_or_else(|| AppError::NotFound(message.to_string()))
    }
}

/// Convenience constructors
impl AppError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        AppError::NotFound(msg.into())
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        AppError::BadRequest(msg.into())
    }

    pub fn not_implemented(msg: impl Into<String>) -> Self {
        AppError::NotImplemented(msg.into())
    }

    pub fn write_failed(msg: impl Into<String>) -> Self {
        AppError::WriteFailed(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}
