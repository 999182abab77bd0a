//! # guard-observability
//!
//! Structured logging for the message guard: subscriber setup and the
//! event vocabulary the engine emits. Events carry counts and term names,
//! never message text.

pub mod tracing_setup;

pub use tracing_setup::{events, init_tracing, init_tracing_with_filter};
