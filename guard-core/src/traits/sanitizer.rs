use super::ISeparatorSource;

/// Rewrites text so no sensitive term survives as an exact substring.
pub trait ISanitizer: Send + Sync {
    /// Sanitize using the implementation's default separator source.
    fn sanitize(&self, text: &str) -> String;

    /// Sanitize drawing every break from `separators`.
    fn sanitize_with(&self, text: &str, separators: &mut dyn ISeparatorSource) -> String;
}
