use guard_sanitizer::{FixedSeparator, MessageGuard};
use proptest::prelude::*;

const TERMS: [&str; 13] = [
    "pay", "mail", "email", "payment", "whatsapp", "skype", "telegram", "money", "dollar",
    "number", "phone", "bank", "review",
];

fn strip_separators(text: &str) -> String {
    text.chars().filter(|c| *c != '-' && *c != '_').collect()
}

// ── Sanitized registry words are never re-detected ───────────────────────

proptest! {
    #[test]
    fn sanitized_terms_are_not_redetected(
        picks in prop::collection::vec(0..TERMS.len(), 1..20),
        upper in prop::collection::vec(any::<bool>(), 20)
    ) {
        let words: Vec<String> = picks
            .iter()
            .zip(upper.iter())
            .map(|(&i, &u)| if u { TERMS[i].to_uppercase() } else { TERMS[i].to_string() })
            .collect();
        let text = words.join(" ");
        let guard = MessageGuard::new();
        let safe = guard.sanitize(&text);
        let again = guard.detect(&safe);
        prop_assert!(again.is_empty(), "'{}' → '{}' still flags {:?}", text, safe, again);
    }
}

// ── Sanitize only ever inserts separators ────────────────────────────────

proptest! {
    #[test]
    fn sanitize_only_inserts_separators(text in "[a-zA-Z ,.!?\n]{0,200}") {
        // No digit 5, so the phrase rule cannot fire.
        let guard = MessageGuard::new();
        let safe = guard.sanitize(&text);
        prop_assert_eq!(strip_separators(&safe), strip_separators(&text));
        prop_assert!(safe.len() - text.len() <= text.split_whitespace().count());
    }

    #[test]
    fn clean_words_pass_through_unchanged(text in "[c-fh-jqrtuvxz ]{0,200}") {
        // Alphabet lacks letters needed by every registry term.
        let guard = MessageGuard::new();
        prop_assert_eq!(guard.sanitize(&text), text.clone());
        prop_assert!(guard.detect(&text).is_empty());
    }

    #[test]
    fn detection_is_deduplicated(text in "(pay|mail|bank|hello|review|money| ){0,60}") {
        let guard = MessageGuard::new();
        let detected = guard.detect(&text);
        let mut names: Vec<&str> = detected.iter().map(|m| m.term_name.as_str()).collect();
        let before = names.len();
        names.sort_unstable();
        names.dedup();
        prop_assert_eq!(names.len(), before);
    }

    #[test]
    fn repeated_sanitize_agrees_modulo_separator(text in "[a-zA-Z ]{0,120}") {
        let guard = MessageGuard::new();
        let dash = guard.sanitize_with(&text, &mut FixedSeparator('-'));
        let random = guard.sanitize(&text);
        prop_assert_eq!(dash.len(), random.len());
        prop_assert_eq!(dash.replace('_', "-"), random.replace('_', "-"));
    }

    #[test]
    fn arbitrary_text_never_panics(text in ".{0,200}") {
        let guard = MessageGuard::new();
        let _ = guard.detect(&text);
        let _ = guard.inspect(&text);
    }
}
