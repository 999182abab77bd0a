//! Error handling for the message guard.
//! One error enum per subsystem, `thiserror` only.

pub mod config_error;
pub mod guard_error;

pub use config_error::ConfigError;
pub use guard_error::{GuardError, GuardResult};
