// Error types for the smoke-test suite

use std::time::Duration;
use thiserror::Error;

/// Result type alias for smoke-suite operations
pub type Result<T> = std::result::Result<T, SmokeError>;

/// Failure taxonomy for scenarios.
///
/// Every scenario failure resolves to one of three families: an expected
/// value did not match (snapshot mismatches included), an awaited condition
/// never occurred, or the underlying browser session misbehaved. I/O and
/// image variants support the visual-regression path.
#[derive(Debug, Error)]
pub enum SmokeError {
    /// An assertion on rendered state did not hold
    #[error("Assertion failed: {0}")]
    Assertion(String),

    /// An awaited navigation, selector, or network response never occurred
    #[error("Timed out after {waited:?} waiting for {what}")]
    Timeout { what: String, waited: Duration },

    /// Underlying browser/session error, surfaced from the automation driver
    #[error("Driver error: {0}")]
    Driver(#[from] playwright_rs::Error),

    /// I/O error (snapshot files, artifacts)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// PNG decode error in the visual-regression path
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

impl SmokeError {
    /// Builds a timeout failure for the given awaited condition.
    pub fn timed_out(what: impl Into<String>, waited: Duration) -> Self {
        SmokeError::Timeout {
            what: what.into(),
            waited,
        }
    }
}
