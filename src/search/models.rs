//! Search request model

use serde::{Deserialize, Serialize};

/// Inbound search request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Raw free-text description from the user
    pub input: String,
}

impl SearchRequest {
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }

    /// Check if the input has no content
    pub fn is_blank(&self) -> bool {
        self.input.trim().is_empty()
    }
}
