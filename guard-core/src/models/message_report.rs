use serde::{Deserialize, Serialize};

use super::DetectionResult;

/// Everything a message form renders after one keystroke.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageReport {
    pub detected: DetectionResult,
    pub sanitized: String,
    /// Whitespace-delimited word count of the input.
    pub word_count: usize,
    /// Whitespace-delimited word count of the sanitized text.
    pub safe_word_count: usize,
}

impl MessageReport {
    pub fn has_risky_terms(&self) -> bool {
        !self.detected.is_empty()
    }
}
