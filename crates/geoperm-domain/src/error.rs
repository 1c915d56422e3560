//! Domain error types for permission operations.

use thiserror::Error;

/// Domain-specific errors.
#[derive(Debug, Error)]
pub enum DomainError {
    /// The region code table could not be opened or its header read.
    /// Fatal at startup: the service must not begin serving without it.
    #[error("region table error: {message}")]
    RegionTable { message: String },
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
