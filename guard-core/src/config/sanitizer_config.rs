use serde::{Deserialize, Serialize};

use super::defaults;

/// Sanitizer subsystem configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SanitizerConfig {
    /// Characters a break may be drawn from. Each draw is independent.
    pub separators: Vec<char>,
    /// Apply fixed phrase idioms (the "5 star" rule) before term breaking.
    pub phrase_rules: bool,
    /// Reject the whole config on the first invalid additional term
    /// instead of skipping it.
    pub strict: bool,
    /// Extra terms appended after the canonical registry rows, in order.
    pub additional_terms: Vec<TermConfig>,
}

impl Default for SanitizerConfig {
    fn default() -> Self {
        Self {
            separators: defaults::DEFAULT_SEPARATORS.to_vec(),
            phrase_rules: defaults::DEFAULT_PHRASE_RULES,
            strict: defaults::DEFAULT_STRICT_TERMS,
            additional_terms: Vec::new(),
        }
    }
}

/// A user-supplied sensitive term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermConfig {
    pub term: String,
    pub break_offset: usize,
    /// Match only when the whole cleaned token equals the term.
    #[serde(default)]
    pub exact_word: bool,
}
