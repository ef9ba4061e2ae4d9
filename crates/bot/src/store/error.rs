//! Store-related errors.

use thiserror::Error;

/// Errors that can occur when talking to the raw document store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// HTTP request failed.
    #[error("Store request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Store returned a non-success status.
    #[error("Store returned {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse the response body.
    #[error("Store response error: {0}")]
    Response(String),
}
