//! # guard-sanitizer
//!
//! Message sanitization engine.
//! Detects marketplace-flagged keywords and rewrites them with an inserted
//! separator so exact-match scanners miss them while people still read them.

pub mod case;
pub mod degradation;
pub mod detector;
pub mod engine;
pub mod phrases;
pub mod registry;
pub mod separator;
pub mod token;
pub mod transformer;

use std::sync::LazyLock;

use guard_core::models::DetectionResult;

pub use engine::MessageGuard;
pub use registry::TermRegistry;
pub use separator::{FixedSeparator, RandomSeparator};

static DEFAULT_GUARD: LazyLock<MessageGuard> = LazyLock::new(MessageGuard::new);

/// Detect sensitive terms with the canonical registry.
pub fn detect(text: &str) -> DetectionResult {
    DEFAULT_GUARD.detect(text)
}

/// Sanitize with the canonical registry and random separators.
pub fn sanitize(text: &str) -> String {
    DEFAULT_GUARD.sanitize(text)
}
