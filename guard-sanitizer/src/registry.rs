//! Ordered table of sensitive terms.
//!
//! Order is significant: a token that contains several terms is broken by
//! the first row that matches, not the longest. `email` therefore breaks
//! through `mail`, and `payment` through `pay`.

use guard_core::config::SanitizerConfig;
use guard_core::errors::{GuardError, GuardResult};
use guard_core::models::{MatchMode, SensitiveTerm};
use guard_observability::events;

use crate::degradation::DegradationTracker;

/// Canonical rows: (term, break offset, match mode).
const CANONICAL_TERMS: [(&str, usize, MatchMode); 13] = [
    ("pay", 2, MatchMode::Substring),
    ("mail", 2, MatchMode::Substring),
    ("email", 2, MatchMode::Substring),
    ("payment", 3, MatchMode::Substring),
    ("whatsapp", 4, MatchMode::Substring),
    ("skype", 2, MatchMode::Substring),
    ("telegram", 3, MatchMode::Substring),
    ("money", 2, MatchMode::Substring),
    ("dollar", 3, MatchMode::Substring),
    ("number", 3, MatchMode::Substring),
    ("phone", 2, MatchMode::Substring),
    ("bank", 2, MatchMode::Substring),
    ("review", 2, MatchMode::ExactWord),
];

/// Immutable, ordered list of sensitive terms.
#[derive(Debug, Clone)]
pub struct TermRegistry {
    terms: Vec<SensitiveTerm>,
}

impl TermRegistry {
    /// The built-in rows only.
    pub fn canonical() -> Self {
        let terms = CANONICAL_TERMS
            .iter()
            .filter_map(|&(term, offset, mode)| SensitiveTerm::new(term, offset, mode).ok())
            .collect();
        Self { terms }
    }

    /// Canonical rows followed by the configured additional terms.
    ///
    /// Invalid or duplicate additional terms are skipped and recorded in the
    /// returned tracker, unless `config.strict` is set, in which case the
    /// first one is returned as an error.
    pub fn from_config(config: &SanitizerConfig) -> GuardResult<(Self, DegradationTracker)> {
        let mut registry = Self::canonical();
        let canonical = registry.len();
        let mut tracker = DegradationTracker::new();

        for extra in &config.additional_terms {
            let mode = if extra.exact_word {
                MatchMode::ExactWord
            } else {
                MatchMode::Substring
            };

            let built = if registry.contains(&extra.term) {
                Err(GuardError::InvalidTerm {
                    term: extra.term.clone(),
                    reason: "duplicate of an existing term".to_string(),
                })
            } else {
                SensitiveTerm::new(extra.term.clone(), extra.break_offset, mode)
            };

            match built {
                Ok(term) => registry.terms.push(term),
                Err(err) if config.strict => return Err(err),
                Err(err) => {
                    let reason = match &err {
                        GuardError::InvalidTerm { reason, .. } => reason.clone(),
                        other => other.to_string(),
                    };
                    events::term_rejected(&extra.term, &reason);
                    tracker.record_failure(&extra.term, &reason);
                }
            }
        }

        events::registry_built(
            canonical,
            registry.len() - canonical,
            tracker.failure_count(),
        );
        Ok((registry, tracker))
    }

    pub fn terms(&self) -> &[SensitiveTerm] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn contains(&self, term: &str) -> bool {
        self.terms.iter().any(|t| t.term() == term)
    }

    /// First row, in registry order, that matches an ASCII-lowercased token.
    /// Returns the byte index of the match inside the token with the row.
    pub fn first_match(&self, lowered: &str) -> Option<(usize, &SensitiveTerm)> {
        self.terms
            .iter()
            .find_map(|term| term.find_in(lowered).map(|idx| (idx, term)))
    }
}

impl Default for TermRegistry {
    fn default() -> Self {
        Self::canonical()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use guard_core::config::TermConfig;

    fn extra(term: &str, break_offset: usize) -> TermConfig {
        TermConfig {
            term: term.to_string(),
            break_offset,
            exact_word: false,
        }
    }

    #[test]
    fn canonical_rows_all_load_in_order() {
        let registry = TermRegistry::canonical();
        let names: Vec<&str> = registry.terms().iter().map(|t| t.term()).collect();
        assert_eq!(
            names,
            vec![
                "pay", "mail", "email", "payment", "whatsapp", "skype", "telegram", "money",
                "dollar", "number", "phone", "bank", "review"
            ]
        );
    }

    #[test]
    fn only_review_is_exact_word() {
        let registry = TermRegistry::canonical();
        for term in registry.terms() {
            let expected = if term.term() == "review" {
                MatchMode::ExactWord
            } else {
                MatchMode::Substring
            };
            assert_eq!(term.mode(), expected, "{}", term.term());
        }
    }

    #[test]
    fn first_row_wins_over_longer_match() {
        let registry = TermRegistry::canonical();
        let (idx, term) = registry.first_match("email").unwrap();
        assert_eq!((idx, term.term()), (1, "mail"));

        let (idx, term) = registry.first_match("payment").unwrap();
        assert_eq!((idx, term.term()), (0, "pay"));
    }

    #[test]
    fn no_match_for_clean_word() {
        assert!(TermRegistry::canonical().first_match("hello").is_none());
    }

    #[test]
    fn additional_terms_append_after_canonical() {
        let config = SanitizerConfig {
            additional_terms: vec![extra("venmo", 2)],
            ..SanitizerConfig::default()
        };
        let (registry, tracker) = TermRegistry::from_config(&config).unwrap();
        assert_eq!(registry.len(), 14);
        assert_eq!(registry.terms().last().unwrap().term(), "venmo");
        assert!(!tracker.has_failures());
    }

    #[test]
    fn invalid_terms_are_skipped_and_tracked() {
        let config = SanitizerConfig {
            additional_terms: vec![
                extra("Venmo", 2),
                extra("cash", 4),
                extra("pay", 1),
                extra("zelle", 2),
            ],
            ..SanitizerConfig::default()
        };
        let (registry, tracker) = TermRegistry::from_config(&config).unwrap();
        assert_eq!(registry.len(), 14);
        assert!(registry.contains("zelle"));
        assert_eq!(tracker.failure_count(), 3);
        let failed: Vec<&str> = tracker.failures().iter().map(|f| f.term.as_str()).collect();
        assert_eq!(failed, vec!["Venmo", "cash", "pay"]);
        assert!(tracker.failures()[2].error.contains("duplicate"));
    }

    #[test]
    fn strict_mode_fails_on_first_invalid_term() {
        let config = SanitizerConfig {
            strict: true,
            additional_terms: vec![extra("cash", 4)],
            ..SanitizerConfig::default()
        };
        let err = TermRegistry::from_config(&config).unwrap_err();
        assert!(matches!(err, GuardError::InvalidTerm { ref term, .. } if term == "cash"));
    }
}
