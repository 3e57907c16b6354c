//! Shared response types for API handlers.

use serde::Serialize;

/// Simple `{ "message": ... }` payload, used by the service banner
/// and delete confirmations.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
