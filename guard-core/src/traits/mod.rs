pub mod detector;
pub mod sanitizer;
pub mod separator;

pub use detector::IDetector;
pub use sanitizer::ISanitizer;
pub use separator::ISeparatorSource;
