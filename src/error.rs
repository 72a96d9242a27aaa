//! Error types for interval construction and queries.

use thiserror::Error;

/// Errors raised by interval construction and by the checked query entry points.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IntervalError {
    /// The query argument has the wrong shape for the operation.
    #[error("`other` must be an {expected}, got {got}")]
    Type { expected: &'static str, got: String },

    /// Array-vs-array broadcasting.
    #[error("{0} between two interval arrays is not implemented")]
    NotSupported(String),

    /// Invalid endpoints or closure mode at construction.
    #[error("{0}")]
    Value(String),
}

impl IntervalError {
    pub(crate) fn expected_interval(got: impl Into<String>) -> Self {
        IntervalError::Type {
            expected: "Interval",
            got: got.into(),
        }
    }

    pub(crate) fn expected_interval_or_point(got: impl Into<String>) -> Self {
        IntervalError::Type {
            expected: "Interval or point",
            got: got.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, IntervalError>;
