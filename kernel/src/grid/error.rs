//! Typed grid construction errors.

/// A grid that is not a non-empty rectangle of characters.
///
/// This is the only error the word search reports; every other input
/// resolves to a boolean.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidGridError {
    /// The grid has zero rows.
    NoRows,
    /// The first row has zero characters.
    NoColumns,
    /// A row's length differs from the first row's.
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
}

impl std::fmt::Display for InvalidGridError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoRows => write!(f, "invalid grid: no rows"),
            Self::NoColumns => write!(f, "invalid grid: rows have no columns"),
            Self::RaggedRow {
                row,
                expected,
                found,
            } => write!(
                f,
                "invalid grid: row {row} has {found} columns, expected {expected}"
            ),
        }
    }
}

impl std::error::Error for InvalidGridError {}
