//! The JSON error body returned by every failing endpoint.

use serde::{Deserialize, Serialize};

/// Error body of the API: `{"error": "<message>"}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }

    /// Body served for routes that match nothing.
    pub fn unknown_endpoint() -> Self {
        Self::new("unknown endpoint")
    }
}
