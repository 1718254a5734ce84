// ABOUTME: Unified error handling for the marche server
// ABOUTME: Defines AppError, its HTTP status mapping, and the JSON error envelope
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Unified Error Handling
//!
//! A single [`AppError`] type flows from the repositories up through the
//! services to the route handlers, where its [`IntoResponse`] impl converts it
//! into the `{"error": "<message>"}` envelope with the matching status code.
//! Store faults are never exposed as stack traces; only the message text is
//! passed through.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Application error type covering the full request path
#[derive(Debug, Error)]
pub enum AppError {
    /// Caller input fails a precondition (400)
    #[error("{0}")]
    InvalidInput(String),

    /// Requested identifier is absent (404)
    #[error("{0}")]
    NotFound(String),

    /// Credential check failed (401)
    #[error("{0}")]
    AuthInvalid(String),

    /// Store connectivity or statement fault (500)
    #[error("database error: {0}")]
    Database(String),

    /// Anything else that should not reach the caller in detail (500)
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a not found error
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create an authentication failure error
    pub fn auth_invalid(msg: impl Into<String>) -> Self {
        Self::AuthInvalid(msg.into())
    }

    /// HTTP status code this error maps to at the handler boundary
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidInput(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::AuthInvalid(_) => StatusCode::UNAUTHORIZED,
            Self::Database(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        Self::Database(err.to_string())
    }
}

impl From<bcrypt::BcryptError> for AppError {
    fn from(err: bcrypt::BcryptError) -> Self {
        Self::Internal(format!("password hashing failed: {err}"))
    }
}

/// JSON error envelope returned for every failure
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable failure message
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self, "request failed");
        }
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Convenience alias for results carrying [`AppError`]
pub type AppResult<T> = Result<T, AppError>;
