//! Grid coordinates and the four orthogonal directions.

/// A cell address in un-padded grid coordinates.
///
/// `(0, 0)` is the top-left real cell. Row `-1`, row `R`, column `-1` and
/// column `C` address the sentinel border of a `BorderedGrid`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coord {
    pub row: isize,
    pub col: isize,
}

impl Coord {
    #[must_use]
    pub const fn new(row: isize, col: isize) -> Self {
        Self { row, col }
    }

    /// The neighbouring coordinate one step in `dir`.
    #[must_use]
    pub const fn step(self, dir: Direction) -> Self {
        let (dr, dc) = dir.delta();
        Self {
            row: self.row.saturating_add(dr),
            col: self.col.saturating_add(dc),
        }
    }

    /// True if `other` differs by exactly one row or one column, not both.
    #[must_use]
    pub fn is_orthogonal_neighbor(self, other: Self) -> bool {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col) == 1
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One of the four orthogonal moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// Default trial order: clockwise starting from up.
    pub const ALL: [Direction; 4] = [Self::Up, Self::Right, Self::Down, Self::Left];

    /// `(row_delta, col_delta)` for this move.
    #[must_use]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Self::Up => (-1, 0),
            Self::Right => (0, 1),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
        }
    }

    /// Lowercase name used in serialized records.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Right => "right",
            Self::Down => "down",
            Self::Left => "left",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
