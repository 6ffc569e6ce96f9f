//! # Store Error Types
//!
//! Error types for remote store operations. Every operation is
//! single-attempt; classification exists for observability, not for retry
//! logic (the engine never retries).

use thiserror::Error;

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Store operation failures.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The existence precondition on delete failed: the record was already
    /// gone. Surfaced as an error (not a silent no-op) so a racing
    /// concurrent delete is observable.
    #[error("Entry '{name}' not found in table '{table}'")]
    NotFound { table: String, name: String },

    /// Failed to reach or authenticate with the store.
    #[error("Store connection failed: {0}")]
    Connection(String),

    /// A command round trip failed after the connection was established.
    #[error("Store command failed: {0}")]
    Command(String),

    /// The store did not answer within the configured response timeout.
    #[error("Store operation timed out: {0}")]
    Timeout(String),
}

impl From<redis::RedisError> for StoreError {
    fn from(err: redis::RedisError) -> Self {
        if err.is_timeout() {
            StoreError::Timeout(err.to_string())
        } else if err.is_connection_refusal() || err.is_io_error() {
            StoreError::Connection(err.to_string())
        } else {
            StoreError::Command(err.to_string())
        }
    }
}

impl StoreError {
    /// Returns true for the delete existence-precondition failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
