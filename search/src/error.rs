//! Typed search errors.
//!
//! `SearchError` represents pre-flight failures only. A search that runs
//! always resolves to a boolean (or a [`crate::report::SnakeReportV1`]);
//! "word not found" is never an error.

use snake_kernel::grid::error::InvalidGridError;

/// Typed failure for pre-flight search validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The input rows do not form a non-empty rectangle.
    InvalidGrid(InvalidGridError),
    /// The policy's direction order is not a permutation of all four moves.
    InvalidPolicy { detail: String },
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidGrid(err) => err.fmt(f),
            Self::InvalidPolicy { detail } => write!(f, "invalid search policy: {detail}"),
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidGrid(err) => Some(err),
            Self::InvalidPolicy { .. } => None,
        }
    }
}

impl From<InvalidGridError> for SearchError {
    fn from(err: InvalidGridError) -> Self {
        Self::InvalidGrid(err)
    }
}
