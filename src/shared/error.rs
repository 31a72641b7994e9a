//! Application Error Types
//!
//! Centralized error handling with Axum integration. Every variant renders as
//! a failure [`ApiResponse`] with a matching HTTP status.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use super::response::ApiResponse;

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Validation failed: {message}")]
    Validation {
        message: String,
        errors: Vec<FieldError>,
    },

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("{service} failed: {message}")]
    Collaborator {
        service: &'static str,
        message: String,
        retryable: bool,
    },

    #[error("Timed out: {0}")]
    Timeout(String),

    #[error("Not implemented: {0}")]
    Unimplemented(String),

    #[error("No handler registered for {request}")]
    NoHandlerRegistered { request: &'static str },

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Field-level validation error
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl AppError {
    /// Build a validation error for a single field.
    pub fn invalid_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        let field = field.into();
        let message = message.into();
        AppError::Validation {
            message: format!("{}: {}", field, message),
            errors: vec![FieldError { field, message }],
        }
    }

    /// HTTP status this error is reported with.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Collaborator { .. } => StatusCode::BAD_GATEWAY,
            AppError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
            AppError::Unimplemented(_) => StatusCode::NOT_IMPLEMENTED,
            AppError::NoHandlerRegistered { .. }
            | AppError::Configuration(_)
            | AppError::Database(_)
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Whether the caller may safely retry the failed operation.
    ///
    /// Only collaborator failures explicitly marked idempotent qualify.
    pub fn is_retryable(&self) -> bool {
        matches!(self, AppError::Collaborator { retryable: true, .. })
    }

    /// Short label used for metrics and log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::Validation { .. } => "validation",
            AppError::BadRequest(_) => "bad_request",
            AppError::Unauthorized(_) => "unauthorized",
            AppError::NotFound(_) => "not_found",
            AppError::Conflict(_) => "conflict",
            AppError::Collaborator { .. } => "collaborator",
            AppError::Timeout(_) => "timeout",
            AppError::Unimplemented(_) => "unimplemented",
            AppError::NoHandlerRegistered { .. } => "no_handler",
            AppError::Configuration(_) => "configuration",
            AppError::Database(_) => "database",
            AppError::Internal(_) => "internal",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let body: ApiResponse<()> = match self {
            AppError::Validation { message, errors } => ApiResponse::fail_with_errors(message, errors),
            AppError::BadRequest(msg)
            | AppError::Unauthorized(msg)
            | AppError::NotFound(msg)
            | AppError::Conflict(msg)
            | AppError::Unimplemented(msg) => ApiResponse::fail(msg),
            AppError::Collaborator { service, message, .. } => {
                tracing::warn!(service, error = %message, "Collaborator failure");
                ApiResponse::fail(format!("{} is unavailable", service))
            }
            AppError::Timeout(msg) => {
                tracing::warn!(request = %msg, "Request timed out");
                ApiResponse::fail("Request timed out")
            }
            AppError::NoHandlerRegistered { request } => {
                tracing::error!(request, "No handler registered");
                ApiResponse::fail("Internal server error")
            }
            AppError::Configuration(msg) => {
                tracing::error!("Configuration error: {}", msg);
                ApiResponse::fail("Internal server error")
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {}", e);
                ApiResponse::fail("Internal server error")
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                ApiResponse::fail("Internal server error")
            }
        };

        (status, Json(body)).into_response()
    }
}
