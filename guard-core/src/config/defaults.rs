// Single source of truth for all default values.

// --- Sanitizer ---
pub const DEFAULT_SEPARATORS: [char; 2] = ['-', '_'];
pub const DEFAULT_PHRASE_RULES: bool = true;
pub const DEFAULT_STRICT_TERMS: bool = false;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = true;
pub const LOG_ENV_VAR: &str = "GUARD_LOG";
pub const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

// --- Environment overrides ---
pub const ENV_PHRASE_RULES: &str = "GUARD_PHRASE_RULES";
pub const ENV_STRICT: &str = "GUARD_STRICT";
pub const ENV_LOG_LEVEL: &str = "GUARD_LOG_LEVEL";
