//! Auth Error Types
//!
//! Domain-level error kinds plus the translation boundary for store
//! sentinels. Integrates with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

use crate::domain::repository::StorageError;
use crate::token::TokenError;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
///
/// Store sentinels are pattern-matched and translated into these kinds at
/// the application layer; anything unrecognized is wrapped as `Storage` with
/// the failing operation's name, never discarded.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Wrong email or password. An unknown email is reported identically so
    /// callers cannot tell which addresses are registered.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Application (tenant) lookup failed
    #[error("Invalid app id")]
    InvalidAppId,

    /// Registration email collision
    #[error("User already exists")]
    UserExists,

    /// User not found. Internal only: login translates this to
    /// `InvalidCredentials` before returning to the caller.
    #[error("User not found")]
    UserNotFound,

    /// Request failed validation at the transport boundary
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Token construction or signing failed
    #[error("Token error: {0}")]
    Token(#[from] TokenError),

    /// Unclassified store failure, wrapped with the failing operation
    #[error("{op}: storage error")]
    Storage {
        op: &'static str,
        #[source]
        source: StorageError,
    },

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Wrap an unclassified store failure with operation context.
    pub fn storage(op: &'static str, source: StorageError) -> Self {
        AuthError::Storage { op, source }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AuthError::InvalidAppId => StatusCode::NOT_FOUND,
            AuthError::UserExists => StatusCode::CONFLICT,
            AuthError::UserNotFound => StatusCode::UNAUTHORIZED,
            AuthError::Validation(_) => StatusCode::BAD_REQUEST,
            AuthError::Token(_) | AuthError::Storage { .. } | AuthError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::InvalidCredentials | AuthError::UserNotFound => ErrorKind::Unauthorized,
            AuthError::InvalidAppId => ErrorKind::NotFound,
            AuthError::UserExists => ErrorKind::Conflict,
            AuthError::Validation(_) => ErrorKind::BadRequest,
            AuthError::Token(_) | AuthError::Storage { .. } | AuthError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Convert to AppError
    ///
    /// Server-side failures get a generic body; the detail stays in logs.
    pub fn to_app_error(&self) -> AppError {
        if self.kind().is_server_error() {
            AppError::new(self.kind(), "Internal error")
        } else {
            AppError::new(self.kind(), self.to_string())
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Storage { op, source } => {
                tracing::error!(op = %op, error = %source, "Auth storage error");
            }
            AuthError::Token(e) => {
                tracing::error!(error = %e, "Token issuance error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::InvalidAppId => {
                tracing::warn!("Lookup with invalid app id");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}
