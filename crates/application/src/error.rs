//! Application error types

use thiserror::Error;

use crate::ports::HttpClientError;

/// Errors surfaced by the synchronization layer.
///
/// These are recorded and logged at the operation boundary; they never
/// cross into caller code as panics or rejections.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SyncError {
    /// No credentials were available for an authenticated read.
    #[error("no auth tokens found")]
    MissingCredentials,

    /// An HTTP request failed at the transport level.
    #[error("HTTP error: {0}")]
    Http(#[from] HttpClientError),

    /// A response body could not be decoded as the expected shape.
    #[error("{operation}: failed to decode response: {message}")]
    Decode {
        /// The operation whose response failed to decode.
        operation: &'static str,
        /// Decoder error message.
        message: String,
    },
}

/// Result type alias for synchronization operations.
pub type SyncResult<T> = Result<T, SyncError>;
