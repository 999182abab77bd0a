//! Risky-term detection over whitespace tokens.

use std::collections::HashSet;

use guard_core::models::{DetectionResult, TermMatch};
use guard_observability::events;

use crate::registry::TermRegistry;
use crate::token;

/// Reports which registry terms occur in a text.
///
/// Each token yields at most one term, chosen by [`token::match_token`], so
/// it is always the row the transformer breaks.
pub struct TermDetector<'a> {
    registry: &'a TermRegistry,
    /// Separator characters kept when matching, so already-broken terms are
    /// not reported again.
    separators: &'a [char],
}

impl<'a> TermDetector<'a> {
    pub fn new(registry: &'a TermRegistry, separators: &'a [char]) -> Self {
        Self {
            registry,
            separators,
        }
    }

    pub fn detect(&self, text: &str) -> DetectionResult {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut result = DetectionResult::new();
        let mut token_count = 0;

        for (token_index, tok) in token::tokens(text).enumerate() {
            token_count += 1;
            let Some(found) = token::match_token(tok.text, self.registry, self.separators) else {
                continue;
            };
            if !seen.insert(found.term.term()) {
                continue;
            }

            result.push(TermMatch {
                surface_form: tok.text[found.core_start..found.core_end].to_string(),
                term_name: found.term.term().to_string(),
                token_index,
                start: tok.start,
            });
        }

        let names: Vec<&str> = result.iter().map(|m| m.term_name.as_str()).collect();
        events::terms_detected(token_count, &names);
        result
    }
}
