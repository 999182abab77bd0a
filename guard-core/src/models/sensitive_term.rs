use serde::{Deserialize, Serialize};

use crate::errors::{GuardError, GuardResult};

/// How a term is compared against a cleaned token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// The token contains the term anywhere.
    #[default]
    Substring,
    /// The whole token equals the term.
    ExactWord,
}

/// A keyword the downstream scanner flags, with where to break it.
///
/// `term` is lowercase ASCII. `break_offset` is the index inside the matched
/// term after which a separator goes, always in `1..term.len()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SensitiveTerm {
    term: String,
    break_offset: usize,
    mode: MatchMode,
}

impl SensitiveTerm {
    /// Build a term, checking its invariants.
    pub fn new(term: impl Into<String>, break_offset: usize, mode: MatchMode) -> GuardResult<Self> {
        let term = term.into();
        if term.is_empty() {
            return Err(invalid(&term, "term is empty"));
        }
        if !term.bytes().all(|b| b.is_ascii_lowercase() || b.is_ascii_digit()) {
            return Err(invalid(&term, "term must be lowercase ASCII letters or digits"));
        }
        if break_offset == 0 || break_offset >= term.len() {
            return Err(invalid(
                &term,
                &format!("break_offset {break_offset} must be in 1..{}", term.len()),
            ));
        }
        Ok(Self {
            term,
            break_offset,
            mode,
        })
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn break_offset(&self) -> usize {
        self.break_offset
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    /// Byte index of this term inside an already-lowercased token, if it matches.
    pub fn find_in(&self, lowered: &str) -> Option<usize> {
        match self.mode {
            MatchMode::ExactWord => (lowered == self.term).then_some(0),
            MatchMode::Substring => lowered.find(self.term.as_str()),
        }
    }
}

fn invalid(term: &str, reason: &str) -> GuardError {
    GuardError::InvalidTerm {
        term: term.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_term() {
        let t = SensitiveTerm::new("email", 2, MatchMode::Substring).unwrap();
        assert_eq!(t.term(), "email");
        assert_eq!(t.break_offset(), 2);
        assert_eq!(t.mode(), MatchMode::Substring);
    }

    #[test]
    fn rejects_offset_at_or_past_end() {
        assert!(SensitiveTerm::new("pay", 3, MatchMode::Substring).is_err());
        assert!(SensitiveTerm::new("pay", 0, MatchMode::Substring).is_err());
    }

    #[test]
    fn rejects_uppercase_and_punctuation() {
        assert!(SensitiveTerm::new("Pay", 1, MatchMode::Substring).is_err());
        assert!(SensitiveTerm::new("pa-y", 1, MatchMode::Substring).is_err());
        assert!(SensitiveTerm::new("", 1, MatchMode::Substring).is_err());
    }

    #[test]
    fn exact_word_only_matches_whole_token() {
        let t = SensitiveTerm::new("review", 2, MatchMode::ExactWord).unwrap();
        assert_eq!(t.find_in("review"), Some(0));
        assert_eq!(t.find_in("reviewed"), None);
        assert_eq!(t.find_in("preview"), None);
    }

    #[test]
    fn substring_reports_first_index() {
        let t = SensitiveTerm::new("mail", 2, MatchMode::Substring).unwrap();
        assert_eq!(t.find_in("email"), Some(1));
        assert_eq!(t.find_in("mailmail"), Some(0));
        assert_eq!(t.find_in("letter"), None);
    }
}
