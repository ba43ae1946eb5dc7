//! Crate-wide error types.
//!
//! This module defines the top-level error type for host applications,
//! allowing for type-safe error handling around the form core. The core
//! itself has very little that can fail: field validation errors are data,
//! not errors, and storage reads degrade silently to an empty log.

pub use crate::store::StoreError;

/// Top-level error type.
///
/// Uses `thiserror` for automatic derivation and conversion.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Storage errors (save/clear of the submission log)
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error with context
    #[error("{0}")]
    Other(String),
}

/// Convenience type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;
