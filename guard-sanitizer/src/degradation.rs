//! Graceful degradation for the term registry.
//!
//! If a configured term is invalid, we skip it, log a warning,
//! and continue with the remaining terms. The tracker records the gap.

/// Record of a configured term that was not loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermFailure {
    pub term: String,
    pub error: String,
}

/// Degradation tracker — accumulates failures while building a registry.
#[derive(Debug, Default, Clone)]
pub struct DegradationTracker {
    failures: Vec<TermFailure>,
}

impl DegradationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a term failure. The registry continues with remaining terms.
    pub fn record_failure(&mut self, term: &str, error: &str) {
        self.failures.push(TermFailure {
            term: term.to_string(),
            error: error.to_string(),
        });
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    pub fn failures(&self) -> &[TermFailure] {
        &self.failures
    }

    pub fn failure_count(&self) -> usize {
        self.failures.len()
    }
}
