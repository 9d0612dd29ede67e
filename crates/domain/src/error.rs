//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur during validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The provided endpoint URL is invalid or malformed.
    #[error("invalid endpoint URL: {0}")]
    InvalidEndpoint(String),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
