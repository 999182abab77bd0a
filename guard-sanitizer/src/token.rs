//! Whitespace tokenizer shared by detection and transformation.
//!
//! A word character is ASCII alphanumeric or `_`. Anything else, including
//! non-ASCII letters, counts as punctuation for matching purposes.

use guard_core::models::SensitiveTerm;

use crate::registry::TermRegistry;

/// A maximal run of either whitespace or non-whitespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    /// Byte offset in the source text.
    pub start: usize,
    pub text: &'a str,
    pub is_whitespace: bool,
}

/// Iterator over the alternating whitespace / token runs of a text.
/// Concatenating every segment reproduces the input exactly.
pub struct Segments<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Segment<'a>> {
        let rest = &self.text[self.pos..];
        let first = rest.chars().next()?;
        let is_whitespace = first.is_whitespace();
        let len = rest
            .char_indices()
            .find(|&(_, c)| c.is_whitespace() != is_whitespace)
            .map_or(rest.len(), |(i, _)| i);

        let segment = Segment {
            start: self.pos,
            text: &rest[..len],
            is_whitespace,
        };
        self.pos += len;
        Some(segment)
    }
}

pub fn segments(text: &str) -> Segments<'_> {
    Segments { text, pos: 0 }
}

/// Non-whitespace runs only.
pub fn tokens(text: &str) -> impl Iterator<Item = Segment<'_>> {
    segments(text).filter(|s| !s.is_whitespace)
}

pub fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Byte span from the first to the last word character of a token, so that
/// leading and trailing punctuation can be set aside. `None` if the token
/// has no word characters.
pub fn core_span(token: &str) -> Option<(usize, usize)> {
    let start = token.find(is_word_char)?;
    // Word characters are ASCII, so the last one is exactly one byte wide.
    let end = token.rfind(is_word_char)? + 1;
    Some((start, end))
}

/// The registry row a token is broken on, and where.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenMatch<'r> {
    pub term: &'r SensitiveTerm,
    /// Byte span of the token core, see [`core_span`].
    pub core_start: usize,
    pub core_end: usize,
    /// Byte index inside the core before which the separator goes.
    pub break_at: usize,
}

/// Match a token's core against the registry.
///
/// The core is lowercased with every non-word character dropped except those
/// in `keep`, so `e.mail` matches `mail` while an already-broken `ema-il`
/// does not. The first matching row wins, and its break position is mapped
/// back onto the original core. Detection and transformation both go through
/// here, so a reported term is always the one that gets broken.
pub fn match_token<'r>(
    token: &str,
    registry: &'r TermRegistry,
    keep: &[char],
) -> Option<TokenMatch<'r>> {
    let (core_start, core_end) = core_span(token)?;
    let core = &token[core_start..core_end];

    let mut cleaned = String::with_capacity(core.len());
    // Byte index in `core` of every byte pushed to `cleaned`.
    let mut origin = Vec::with_capacity(core.len());
    for (i, c) in core.char_indices() {
        if is_word_char(c) || keep.contains(&c) {
            cleaned.push(c.to_ascii_lowercase());
            origin.extend(std::iter::repeat(i).take(c.len_utf8()));
        }
    }

    let (idx, term) = registry.first_match(&cleaned)?;
    // Terms are ASCII, so the offset lands on a single-byte char of the match.
    let break_at = *origin.get(idx + term.break_offset())?;
    Some(TokenMatch {
        term,
        core_start,
        core_end,
        break_at,
    })
}
