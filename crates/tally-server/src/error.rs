//! Error types for the HTTP boundary.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tally_store::StoreError;
use thiserror::Error;

/// Errors surfaced to HTTP clients.
///
/// Detailed causes are logged where the error is raised; the response
/// bodies below are the entire client-visible contract. Both malformed
/// documents and field validation failures collapse into the same generic
/// invalid-input response.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request body was not a valid receipt (malformed document or a
    /// field validation failure).
    #[error("the receipt is invalid")]
    InvalidReceipt,

    /// No points entry exists for the requested identifier.
    #[error("no receipt found for that id")]
    NotFound,

    /// A freshly generated identifier collided with an existing entry. An
    /// internal fault, never the caller's input: the existing entry is left
    /// untouched.
    #[error("identifier collision for {0}")]
    IdCollision(String),

    /// Storage backend failure.
    #[error("storage error: {0}")]
    Store(#[from] StoreError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::InvalidReceipt => (StatusCode::BAD_REQUEST, "The receipt is invalid.\n"),
            ApiError::NotFound => (StatusCode::NOT_FOUND, "No receipt found for that ID.\n"),
            ApiError::IdCollision(_) | ApiError::Store(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error.\n")
            }
        };
        (status, body).into_response()
    }
}

/// Result type for handler operations.
pub type Result<T> = std::result::Result<T, ApiError>;
