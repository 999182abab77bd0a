pub mod message_report;
pub mod sensitive_term;
pub mod term_match;

pub use message_report::MessageReport;
pub use sensitive_term::{MatchMode, SensitiveTerm};
pub use term_match::{DetectionResult, TermMatch};
