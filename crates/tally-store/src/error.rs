//! Error types for the store module.

use thiserror::Error;

/// Errors that can occur during store operations.
///
/// The in-memory backend never fails, but the trait is fallible so that
/// backends with real I/O can slot in behind the same interface.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backend could not complete the operation.
    #[error("store backend error: {0}")]
    Backend(String),
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
