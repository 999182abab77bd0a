//! Safe-text rewriting: phrase idioms first, then one break per risky token.

use guard_core::traits::ISeparatorSource;

use crate::case::preserve_case;
use crate::phrases;
use crate::registry::TermRegistry;
use crate::token;

/// Output of a transformation pass with counts for logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transformed {
    pub text: String,
    /// Tokens that received a separator.
    pub breaks: usize,
    /// Phrase idioms rewritten.
    pub phrases: usize,
}

pub struct SafeTextTransformer<'a> {
    registry: &'a TermRegistry,
    /// Separator alphabet, kept when matching so broken terms stay broken.
    alphabet: &'a [char],
    phrase_rules: bool,
}

impl<'a> SafeTextTransformer<'a> {
    pub fn new(registry: &'a TermRegistry, alphabet: &'a [char], phrase_rules: bool) -> Self {
        Self {
            registry,
            alphabet,
            phrase_rules,
        }
    }

    /// Rewrite `text`. Whitespace is reproduced exactly; only risky tokens
    /// and phrase idioms change.
    pub fn transform(&self, text: &str, separators: &mut dyn ISeparatorSource) -> Transformed {
        let (phrased, phrase_count) = if self.phrase_rules {
            phrases::apply_five_star(text)
        } else {
            (text.into(), 0)
        };

        let mut out = String::with_capacity(phrased.len() + 8);
        let mut breaks = 0;
        for segment in token::segments(&phrased) {
            if segment.is_whitespace {
                out.push_str(segment.text);
                continue;
            }
            match self.break_token(segment.text, separators) {
                Some(broken) => {
                    out.push_str(&broken);
                    breaks += 1;
                }
                None => out.push_str(segment.text),
            }
        }

        Transformed {
            text: out,
            breaks,
            phrases: phrase_count,
        }
    }

    /// Insert one separator into the token's core at the position
    /// [`token::match_token`] picks. Leading and trailing punctuation is kept
    /// as-is.
    fn break_token(&self, tok: &str, separators: &mut dyn ISeparatorSource) -> Option<String> {
        let found = token::match_token(tok, self.registry, self.alphabet)?;
        let (start, end) = (found.core_start, found.core_end);
        let core = &tok[start..end];

        let at = found.break_at;
        let mut broken = String::with_capacity(core.len() + 4);
        broken.push_str(&core[..at]);
        broken.push(separators.next_separator());
        broken.push_str(&core[at..]);

        let mut out = String::with_capacity(tok.len() + 4);
        out.push_str(&tok[..start]);
        out.push_str(&preserve_case(core, &broken));
        out.push_str(&tok[end..]);
        Some(out)
    }
}
