//! # guard-core
//!
//! Foundation crate for the message guard.
//! Defines the shared types, traits, errors, config, and defaults.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::GuardConfig;
pub use errors::{GuardError, GuardResult};
pub use models::{DetectionResult, MatchMode, MessageReport, SensitiveTerm, TermMatch};
