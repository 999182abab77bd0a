//! Carry the capitalization pattern of a word over to its rewritten form.

/// Apply the case pattern of `original` to `replacement`.
///
/// All-upper wins first, then all-lower, then Title case. Anything else
/// (irregular case such as `eMaIl`) returns `replacement` untouched.
pub fn preserve_case(original: &str, replacement: &str) -> String {
    if original == original.to_uppercase() {
        return replacement.to_uppercase();
    }
    if original == original.to_lowercase() {
        return replacement.to_lowercase();
    }
    if is_title_case(original) {
        let mut chars = replacement.chars();
        return match chars.next() {
            Some(first) => first.to_uppercase().chain(chars.as_str().to_lowercase().chars()).collect(),
            None => String::new(),
        };
    }
    replacement.to_string()
}

fn is_title_case(s: &str) -> bool {
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    let rest = chars.as_str();
    first.to_uppercase().eq(std::iter::once(first)) && rest == rest.to_lowercase()
}
