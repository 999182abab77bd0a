//! Configuration system for the message guard.
//! TOML-based: env > file > compiled defaults.

pub mod defaults;
pub mod guard_config;
pub mod observability_config;
pub mod sanitizer_config;

pub use guard_config::GuardConfig;
pub use observability_config::ObservabilityConfig;
pub use sanitizer_config::{SanitizerConfig, TermConfig};
