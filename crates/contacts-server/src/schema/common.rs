//! Shared response bodies.

use serde::{Deserialize, Serialize};

/// `{"message": "..."}` body used by the root endpoint, delete
/// confirmations, and every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        MessageResponse {
            message: message.into(),
        }
    }
}
