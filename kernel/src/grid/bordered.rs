//! `BorderedGrid`: a `Grid` wrapped in a one-cell sentinel ring.
//!
//! # Layout
//!
//! The padded plane is `(R + 2) x (C + 2)` cells, stored row-major. Real cell
//! `(r, c)` lives at padded `(r + 1, c + 1)`. Ring cells hold `None`, which
//! can never equal a word character, so neighbour lookups from any real cell
//! never need a bounds branch.

use crate::grid::coord::Coord;
use crate::grid::error::InvalidGridError;
use crate::grid::grid::Grid;
use crate::proof::hash::ContentHash;

/// A read-only grid with a sentinel border.
///
/// `Send + Sync`: one instance may back any number of concurrent searches.
#[derive(Debug, Clone)]
pub struct BorderedGrid {
    grid: Grid,
    padded_cols: usize,
    /// `None` on the ring, `Some(ch)` inside.
    padded: Vec<Option<char>>,
}

impl BorderedGrid {
    /// Wrap an already-validated grid.
    #[must_use]
    pub fn new(grid: Grid) -> Self {
        let padded_rows = grid.rows() + 2;
        let padded_cols = grid.cols() + 2;
        let mut padded = vec![None; padded_rows * padded_cols];
        for (row, col, ch) in grid.cells() {
            padded[(row + 1) * padded_cols + col + 1] = Some(ch);
        }
        Self {
            grid,
            padded_cols,
            padded,
        }
    }

    /// Validate `rows` and wrap the result.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidGridError`] for an empty or ragged grid.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, InvalidGridError> {
        Grid::from_rows(rows).map(Self::new)
    }

    /// The wrapped grid.
    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub const fn rows(&self) -> usize {
        self.grid.rows()
    }

    #[must_use]
    pub const fn cols(&self) -> usize {
        self.grid.cols()
    }

    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.grid.cell_count()
    }

    /// Number of cells in the padded plane, `(R + 2) * (C + 2)`.
    #[must_use]
    pub fn padded_len(&self) -> usize {
        self.padded.len()
    }

    /// Index of `coord` in the padded plane.
    ///
    /// Defined for `-1 <= row <= R` and `-1 <= col <= C`; `None` beyond that.
    #[must_use]
    pub fn padded_index(&self, coord: Coord) -> Option<usize> {
        let prow = usize::try_from(coord.row.checked_add(1)?).ok()?;
        let pcol = usize::try_from(coord.col.checked_add(1)?).ok()?;
        if pcol >= self.padded_cols || prow >= self.grid.rows() + 2 {
            return None;
        }
        Some(prow * self.padded_cols + pcol)
    }

    /// The character at `(row, col)`; `None` on the border or beyond it.
    #[must_use]
    pub fn at(&self, row: isize, col: isize) -> Option<char> {
        self.cell(Coord::new(row, col))
    }

    /// [`BorderedGrid::at`] addressed by [`Coord`].
    #[must_use]
    pub fn cell(&self, coord: Coord) -> Option<char> {
        self.padded_index(coord)
            .and_then(|i| self.padded.get(i).copied().flatten())
    }

    /// True if `coord` addresses a real (non-border) cell.
    #[must_use]
    pub fn contains_coord(&self, coord: Coord) -> bool {
        self.cell(coord).is_some()
    }

    /// Row-major iterator over real cells as `(Coord, char)`.
    pub fn cells(&self) -> impl Iterator<Item = (Coord, char)> + '_ {
        self.grid.cells().filter_map(|(row, col, ch)| {
            let row = isize::try_from(row).ok()?;
            let col = isize::try_from(col).ok()?;
            Some((Coord::new(row, col), ch))
        })
    }

    /// Fingerprint of the wrapped grid (the border is not hashed).
    #[must_use]
    pub fn fingerprint(&self) -> ContentHash {
        self.grid.fingerprint()
    }
}
