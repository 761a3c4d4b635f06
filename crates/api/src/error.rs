//! Unified request error handling.
//!
//! Provides the `AppError` type all route handlers return. Lookup misses and
//! validation failures map deterministically to their status codes; store
//! failures are logged and surface as a generic server error.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use taphouse_core::Violation;

use crate::db::RepositoryError;

/// Application-level error type for the API.
#[derive(Debug, Error)]
pub enum AppError {
    /// Lookup by id yielded no document.
    #[error("not found")]
    NotFound,

    /// One or more field constraints violated on input.
    #[error("validation failed: {}", join_violations(.0))]
    Validation(Vec<Violation>),

    /// The store call failed; not locally recovered.
    #[error("store error: {0}")]
    Store(#[from] RepositoryError),
}

fn join_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if matches!(self, Self::Store(_)) {
            tracing::error!(error = %self, "request failed");
        }

        let status = match &self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Don't expose store internals to clients
        let message = match &self {
            Self::Store(_) => "Internal server error".to_owned(),
            _ => self.to_string(),
        };

        (status, message).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
