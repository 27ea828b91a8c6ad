//! Error types and HTTP error response handling.
//!
//! This module defines all application errors and how they are converted
//! into HTTP responses.
//!
//! # Status Code Mapping
//!
//! - `NotFound` → 404 (unknown apikey, unknown key, or both — never
//!   distinguished to the client)
//! - `InvalidValue` → 422 with a plain-text explanation
//! - `InvalidBody` → 500 (malformed registration body)
//! - `Database` → 500
//!
//! Internal errors are logged server-side with the underlying cause; the
//! client never sees it.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Application-wide error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Database operation failed (connection error, query error,
    /// constraint violation).
    ///
    /// Constraint violations include the astronomically unlikely API key
    /// collision at registration and the loser of two concurrent creates
    /// for the same (apikey, key). Both are terminal for the request.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The API key, the pair key, or their combination is unknown.
    ///
    /// Deliberately carries no detail about which lookup missed.
    #[error("not found")]
    NotFound,

    /// The PUT body failed validation: malformed JSON, missing `value`
    /// field, non-string value, or value longer than 4096 bytes.
    ///
    /// Returns HTTP 422 with the contained message. No write occurs.
    #[error("{0}")]
    InvalidValue(String),

    /// The registration body could not be decoded as JSON.
    ///
    /// Handling aborts immediately; no key is generated and nothing is
    /// inserted.
    #[error("invalid request body: {0}")]
    InvalidBody(#[from] serde_json::Error),
}

/// Convert AppError into an HTTP response.
///
/// Allows handlers to return `Result<T, AppError>` and have errors
/// converted to the proper status codes automatically.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound => (StatusCode::NOT_FOUND, "not found").into_response(),
            AppError::InvalidValue(message) => {
                (StatusCode::UNPROCESSABLE_ENTITY, message).into_response()
            }
            AppError::InvalidBody(err) => {
                tracing::error!(error = %err, "failed to decode request body");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
            AppError::Database(err) => {
                tracing::error!(error = %err, "store operation failed");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}
