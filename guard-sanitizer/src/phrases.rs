//! Fixed phrase idioms handled outside the term registry.
//!
//! "5 star" (in any case, any spacing, including "5star") is normalized to
//! `5 st(a)r` before term breaking runs.

use std::borrow::Cow;

const STAR: &[u8; 4] = b"star";
const STAR_MARKER: &str = "(a)r";

/// Rewrite every "5<whitespace*>star" occurrence. Returns the text and the
/// number of rewrites; the text is borrowed when nothing changed.
pub fn apply_five_star(text: &str) -> (Cow<'_, str>, usize) {
    let bytes = text.as_bytes();
    let mut out = String::new();
    let mut count = 0;
    let mut copied = 0;
    let mut i = 0;

    while i < bytes.len() {
        // UTF-8 continuation bytes never equal b'5', so `i` is a char boundary here.
        if bytes[i] != b'5' {
            i += 1;
            continue;
        }

        let after = &text[i + 1..];
        let star_at = i + 1 + (after.len() - after.trim_start().len());
        let is_star = bytes
            .get(star_at..star_at + STAR.len())
            .is_some_and(|b| b.eq_ignore_ascii_case(STAR));
        if !is_star {
            i += 1;
            continue;
        }

        out.push_str(&text[copied..i]);
        out.push_str("5 ");
        out.push_str(&text[star_at..star_at + 2]);
        out.push_str(STAR_MARKER);
        count += 1;
        i = star_at + STAR.len();
        copied = i;
    }

    if count == 0 {
        return (Cow::Borrowed(text), 0);
    }
    out.push_str(&text[copied..]);
    (Cow::Owned(out), count)
}
