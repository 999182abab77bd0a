use serde::{Deserialize, Serialize};

/// One detected sensitive term, as it appeared in the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermMatch {
    /// The token as written, surrounding punctuation trimmed, original case.
    pub surface_form: String,
    /// The registry term that matched.
    pub term_name: String,
    /// Zero-based index of the whitespace-delimited token.
    pub token_index: usize,
    /// Byte offset of the token in the input.
    pub start: usize,
}

/// Ordered detections, at most one per distinct term, first-seen order.
pub type DetectionResult = Vec<TermMatch>;
