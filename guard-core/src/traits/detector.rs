use crate::models::DetectionResult;

/// Sensitive-term detection.
pub trait IDetector: Send + Sync {
    /// Report the distinct sensitive terms present in `text`, first-seen order.
    fn detect(&self, text: &str) -> DetectionResult;
}
