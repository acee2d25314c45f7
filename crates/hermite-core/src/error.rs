use thiserror::Error;

/// Every failure the spline engine can surface.
///
/// All operations are pure and deterministic, so no error is retryable; a
/// failed mutation leaves the curve exactly as it was.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SplineError {
    #[error("index {index} out of range (curve has {len} points)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("format error at line {line}: {reason}")]
    Format { line: usize, reason: String },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl SplineError {
    pub fn format(line: usize, reason: impl Into<String>) -> Self {
        Self::Format {
            line,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SplineError>;
