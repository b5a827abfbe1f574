//! Client error types.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors produced by [`ContactsClient`](crate::ContactsClient) calls.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request could not be sent or the response could not be decoded.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("{message} (HTTP {status})")]
    Api { status: StatusCode, message: String },

    /// Reading user input failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl ClientError {
    /// True when the server reported that the contact does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ClientError::Api { status, .. } if *status == StatusCode::NOT_FOUND)
    }
}
