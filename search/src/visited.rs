//! Per-attempt visited set.
//!
//! Insertion order is the traced path; a mark plane over the padded grid
//! gives O(1) membership. A `VisitedSet` holds one attempt from one start
//! cell at a time; [`VisitedSet::clear`] empties it for the next attempt.

use snake_kernel::grid::bordered::BorderedGrid;
use snake_kernel::grid::coord::Coord;

/// Cells consumed by the current path attempt.
#[derive(Debug, Clone)]
pub struct VisitedSet {
    path: Vec<Coord>,
    marks: Vec<bool>,
    /// Padded-plane index of each `path` entry, for O(1) unmarking.
    indices: Vec<usize>,
}

impl VisitedSet {
    /// An empty set sized for `grid`'s padded plane.
    #[must_use]
    pub fn for_grid(grid: &BorderedGrid) -> Self {
        Self {
            path: Vec::new(),
            marks: vec![false; grid.padded_len()],
            indices: Vec::new(),
        }
    }

    /// Mark `coord` visited and append it to the path.
    ///
    /// Returns `false` (and changes nothing) if `coord` was already visited
    /// or lies outside `grid`'s padded plane.
    pub fn push(&mut self, grid: &BorderedGrid, coord: Coord) -> bool {
        let Some(index) = grid.padded_index(coord) else {
            return false;
        };
        match self.marks.get_mut(index) {
            Some(mark) if !*mark => {
                *mark = true;
                self.path.push(coord);
                self.indices.push(index);
                true
            }
            _ => false,
        }
    }

    /// Remove and return the most recently visited cell.
    pub fn pop(&mut self) -> Option<Coord> {
        let index = self.indices.pop()?;
        if let Some(mark) = self.marks.get_mut(index) {
            *mark = false;
        }
        self.path.pop()
    }

    /// True if `coord` is on the current path.
    #[must_use]
    pub fn contains(&self, grid: &BorderedGrid, coord: Coord) -> bool {
        grid.padded_index(coord)
            .and_then(|i| self.marks.get(i).copied())
            .unwrap_or(false)
    }

    /// Unmark every visited cell, keeping the mark plane's allocation.
    pub fn clear(&mut self) {
        while self.pop().is_some() {}
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.path.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Consume the set, keeping the path.
    #[must_use]
    pub fn into_path(self) -> Vec<Coord> {
        self.path
    }
}
