use guard_core::config::{GuardConfig, SanitizerConfig};
use guard_core::errors::GuardResult;
use guard_core::models::{DetectionResult, MessageReport};
use guard_core::traits::{IDetector, ISanitizer, ISeparatorSource};
use guard_observability::events;
use tracing::debug;

use crate::degradation::DegradationTracker;
use crate::detector::TermDetector;
use crate::registry::TermRegistry;
use crate::separator::RandomSeparator;
use crate::transformer::SafeTextTransformer;

/// Message sanitization engine: the composition root callers talk to.
///
/// Holds an immutable term registry and config. `detect` and `sanitize` are
/// independent passes over the same input; neither reads the other's output,
/// and nothing outlives a call except the registry itself.
#[derive(Debug, Clone)]
pub struct MessageGuard {
    registry: TermRegistry,
    config: SanitizerConfig,
    degradation: DegradationTracker,
}

impl MessageGuard {
    /// Engine over the canonical registry with default settings.
    pub fn new() -> Self {
        Self {
            registry: TermRegistry::canonical(),
            config: SanitizerConfig::default(),
            degradation: DegradationTracker::new(),
        }
    }

    /// Engine built from a validated config. Invalid additional terms are
    /// skipped (see [`MessageGuard::degradation`]) unless the config is strict.
    pub fn with_config(config: &GuardConfig) -> GuardResult<Self> {
        config.validate()?;
        let (registry, degradation) = TermRegistry::from_config(&config.sanitizer)?;
        Ok(Self {
            registry,
            config: config.sanitizer.clone(),
            degradation,
        })
    }

    pub fn registry(&self) -> &TermRegistry {
        &self.registry
    }

    /// Configured terms that were rejected while building the registry.
    pub fn degradation(&self) -> &DegradationTracker {
        &self.degradation
    }

    /// Distinct sensitive terms in `text`, first-seen order.
    pub fn detect(&self, text: &str) -> DetectionResult {
        TermDetector::new(&self.registry, &self.config.separators).detect(text)
    }

    /// Safe rewrite of `text` with randomly drawn separators.
    pub fn sanitize(&self, text: &str) -> String {
        let mut separators = RandomSeparator::new(&self.config.separators);
        self.sanitize_with(text, &mut separators)
    }

    /// Safe rewrite of `text` drawing every break from `separators`.
    pub fn sanitize_with(&self, text: &str, separators: &mut dyn ISeparatorSource) -> String {
        let transformed = SafeTextTransformer::new(
            &self.registry,
            &self.config.separators,
            self.config.phrase_rules,
        )
        .transform(text, separators);
        events::message_sanitized(text.len(), transformed.breaks, transformed.phrases);
        transformed.text
    }

    /// Both outputs plus word counts, for a form that re-renders per keystroke.
    pub fn inspect(&self, text: &str) -> MessageReport {
        let detected = self.detect(text);
        let sanitized = self.sanitize(text);
        let report = MessageReport {
            word_count: text.split_whitespace().count(),
            safe_word_count: sanitized.split_whitespace().count(),
            detected,
            sanitized,
        };
        debug!(
            detected = report.detected.len(),
            words = report.word_count,
            safe_words = report.safe_word_count,
            "inspected message"
        );
        report
    }
}

impl Default for MessageGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl IDetector for MessageGuard {
    fn detect(&self, text: &str) -> DetectionResult {
        MessageGuard::detect(self, text)
    }
}

impl ISanitizer for MessageGuard {
    fn sanitize(&self, text: &str) -> String {
        MessageGuard::sanitize(self, text)
    }

    fn sanitize_with(&self, text: &str, separators: &mut dyn ISeparatorSource) -> String {
        MessageGuard::sanitize_with(self, text, separators)
    }
}
