use super::ConfigError;

/// Top-level error for building a message guard.
///
/// Detection and sanitization themselves never fail; only construction
/// from configuration can.
#[derive(Debug, thiserror::Error)]
pub enum GuardError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("invalid sensitive term '{term}': {reason}")]
    InvalidTerm { term: String, reason: String },
}

pub type GuardResult<T> = Result<T, GuardError>;
