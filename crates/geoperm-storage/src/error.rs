//! Storage error types.

use thiserror::Error;

/// Storage-specific errors.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Distributor not found. Distinct from a permission check that
    /// answers NO: callers surface this as 404, not as a denial.
    #[error("distributor not found: {name}")]
    DistributorNotFound { name: String },

    /// Internal error (e.g. a poisoned lock).
    #[error("internal storage error: {message}")]
    Internal { message: String },
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;
