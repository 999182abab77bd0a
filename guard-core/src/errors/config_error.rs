//! Configuration errors.

/// Errors that can occur while loading or validating configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse config at {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("config file not found: {path}")]
    FileNotFound { path: String },

    #[error("invalid config value for {field}: {message}")]
    ValidationFailed { field: String, message: String },
}
