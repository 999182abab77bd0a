//! Structured log events for engine operations.
//!
//! Each function emits a `tracing` event with structured fields.

/// Log the outcome of a detection pass.
pub fn terms_detected(token_count: usize, terms: &[&str]) {
    tracing::debug!(
        event = "terms_detected",
        token_count = token_count,
        term_count = terms.len(),
        terms = ?terms,
        "terms detected"
    );
}

/// Log the outcome of a sanitization pass.
pub fn message_sanitized(input_len: usize, breaks: usize, phrases: usize) {
    tracing::debug!(
        event = "message_sanitized",
        input_len = input_len,
        breaks = breaks,
        phrases = phrases,
        "message sanitized"
    );
}

/// Log a configured term that was skipped while building the registry.
pub fn term_rejected(term: &str, reason: &str) {
    tracing::warn!(
        event = "term_rejected",
        term = %term,
        reason = %reason,
        "configured term rejected, continuing without it"
    );
}

/// Log a registry build.
pub fn registry_built(canonical: usize, additional: usize, rejected: usize) {
    tracing::info!(
        event = "registry_built",
        canonical = canonical,
        additional = additional,
        rejected = rejected,
        "term registry built"
    );
}
