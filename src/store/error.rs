//! Store error types
//!
//! Failures of a backing store request. The container collapses all of them
//! into generic messages; the distinctions here only reach the logs.

use thiserror::Error;

/// Errors that can occur when talking to the backing store
#[derive(Error, Debug)]
pub enum StoreError {
    /// Connection refused or host unreachable
    #[error("Backing store unavailable: {0}")]
    Unavailable(String),

    /// Request did not complete within the configured timeout
    #[error("Request timeout")]
    Timeout,

    /// Store answered with a non-success status
    #[error("Store rejected request with status {status}: {message}")]
    Status { status: u16, message: String },

    /// Response body was not the expected JSON
    #[error("Invalid response body: {0}")]
    Decode(String),

    /// Any other transport failure
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),
}

impl StoreError {
    /// Classify a transport error the way the logs report it
    pub(crate) fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            StoreError::Timeout
        } else if err.is_connect() {
            StoreError::Unavailable(err.to_string())
        } else if err.is_decode() {
            StoreError::Decode(err.to_string())
        } else {
            StoreError::Request(err)
        }
    }

    /// True when the store was reached and refused the request
    pub fn is_rejection(&self) -> bool {
        matches!(self, StoreError::Status { .. })
    }
}

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;
