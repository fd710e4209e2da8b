//! `Grid`: an immutable, validated rectangle of characters.

use crate::grid::error::InvalidGridError;
use crate::proof::hash::{canonical_hash, ContentHash};
use crate::proof::hash_domain::HashDomain;

/// An R×C grid of `char`, R ≥ 1 and C ≥ 1.
///
/// Cells are stored row-major. Never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<char>,
}

impl Grid {
    /// Build a grid from rows of text, one `char` per cell.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidGridError`] if there are no rows, the first row is
    /// empty, or any row's length differs from the first row's.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, InvalidGridError> {
        let first = rows.first().ok_or(InvalidGridError::NoRows)?;
        let cols = first.as_ref().chars().count();
        if cols == 0 {
            return Err(InvalidGridError::NoColumns);
        }

        let mut cells = Vec::with_capacity(rows.len() * cols);
        for (row, text) in rows.iter().enumerate() {
            let before = cells.len();
            cells.extend(text.as_ref().chars());
            let found = cells.len() - before;
            if found != cols {
                return Err(InvalidGridError::RaggedRow {
                    row,
                    expected: cols,
                    found,
                });
            }
        }

        Ok(Self {
            rows: rows.len(),
            cols,
            cells,
        })
    }

    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells (`rows * cols`).
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// The character at `(row, col)`, or `None` outside the grid.
    #[must_use]
    pub fn at(&self, row: usize, col: usize) -> Option<char> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.cells.get(row * self.cols + col).copied()
    }

    /// Row-major iterator over `(row, col, char)`.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, char)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &ch)| (i / cols, i % cols, ch))
    }

    /// Domain-separated content hash of the grid.
    ///
    /// Hash input: `rows:u64le || cols:u64le || utf8(row-major cells)`.
    #[must_use]
    pub fn fingerprint(&self) -> ContentHash {
        let text: String = self.cells.iter().collect();
        let mut data = Vec::with_capacity(16 + text.len());
        data.extend_from_slice(&(self.rows as u64).to_le_bytes());
        data.extend_from_slice(&(self.cols as u64).to_le_bytes());
        data.extend_from_slice(text.as_bytes());
        canonical_hash(HashDomain::GridIdentity, &data)
    }
}
