//! Search entry points and the backtracking extension.
//!
//! For every real cell equal to `word[0]` (row-major order) an emptied
//! [`VisitedSet`] is seeded with that cell and the rest of the word is
//! extended depth-first, one orthogonal step at a time. The first full match
//! ends the whole search; no further branches or start cells are explored.

use snake_kernel::grid::bordered::BorderedGrid;
use snake_kernel::grid::coord::Coord;
use snake_kernel::grid::error::InvalidGridError;

use crate::error::SearchError;
use crate::policy::SnakePolicyV1;
use crate::report::{SearchCountersV1, SnakeReportV1, TerminationReasonV1};
use crate::visited::VisitedSet;

/// Whether `word` can be traced as a snake in `rows`.
///
/// The empty word is always present.
///
/// # Errors
///
/// Returns [`InvalidGridError`] if `rows` is empty or ragged, even when
/// `word` is empty.
pub fn contains<S: AsRef<str>>(rows: &[S], word: &str) -> Result<bool, InvalidGridError> {
    let grid = BorderedGrid::from_rows(rows)?;
    Ok(SnakeSearcher::new(&grid).contains(word))
}

/// Run a full search over `rows` and return its audit report.
///
/// # Errors
///
/// Returns [`SearchError::InvalidGrid`] for malformed rows and
/// [`SearchError::InvalidPolicy`] for a policy that fails validation.
pub fn search<S: AsRef<str>>(
    rows: &[S],
    word: &str,
    policy: &SnakePolicyV1,
) -> Result<SnakeReportV1, SearchError> {
    let grid = BorderedGrid::from_rows(rows)?;
    let searcher = SnakeSearcher::with_policy(&grid, policy)?;
    Ok(searcher.search(word))
}

/// How a single trace ended, before it is turned into a report.
enum Trace {
    EmptyWord,
    Found(Vec<Coord>),
    NoStartCell,
    Exhausted,
}

/// Backtracking snake search over a borrowed grid.
///
/// Holds no per-search state; every call builds its own visited set, so one
/// searcher may serve concurrent callers.
#[derive(Debug, Clone)]
pub struct SnakeSearcher<'g> {
    grid: &'g BorderedGrid,
    policy: SnakePolicyV1,
}

impl<'g> SnakeSearcher<'g> {
    /// A searcher using [`SnakePolicyV1::default`].
    #[must_use]
    pub fn new(grid: &'g BorderedGrid) -> Self {
        Self {
            grid,
            policy: SnakePolicyV1::default(),
        }
    }

    /// A searcher using `policy`.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] if `policy` fails validation.
    pub fn with_policy(
        grid: &'g BorderedGrid,
        policy: &SnakePolicyV1,
    ) -> Result<Self, SearchError> {
        policy.validate()?;
        Ok(Self {
            grid,
            policy: policy.clone(),
        })
    }

    /// Whether `word` can be traced in the grid.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.find_path(word).is_some()
    }

    /// The first path found for `word`, in word order.
    ///
    /// The empty word yields `Some(vec![])`.
    #[must_use]
    pub fn find_path(&self, word: &str) -> Option<Vec<Coord>> {
        let chars: Vec<char> = word.chars().collect();
        match self.trace(&chars, &mut SearchCountersV1::default()) {
            Trace::EmptyWord => Some(Vec::new()),
            Trace::Found(path) => Some(path),
            Trace::NoStartCell | Trace::Exhausted => None,
        }
    }

    /// Search for `word` and record the outcome with work counters.
    #[must_use]
    pub fn search(&self, word: &str) -> SnakeReportV1 {
        let chars: Vec<char> = word.chars().collect();
        let mut counters = SearchCountersV1::default();
        let (termination, path) = match self.trace(&chars, &mut counters) {
            Trace::EmptyWord => (TerminationReasonV1::EmptyWord, Vec::new()),
            Trace::Found(path) => {
                let termination = path
                    .first()
                    .map_or(TerminationReasonV1::EmptyWord, |&start| {
                        TerminationReasonV1::PathFound { start }
                    });
                (termination, path)
            }
            Trace::NoStartCell => (TerminationReasonV1::NoStartCell, Vec::new()),
            Trace::Exhausted => (TerminationReasonV1::StartCellsExhausted, Vec::new()),
        };
        SnakeReportV1 {
            word: word.to_string(),
            grid_fingerprint: self.grid.fingerprint(),
            policy: self.policy.clone(),
            termination,
            path,
            counters,
        }
    }

    fn trace(&self, word: &[char], counters: &mut SearchCountersV1) -> Trace {
        let Some((&first, rest)) = word.split_first() else {
            return Trace::EmptyWord;
        };

        let mut any_start = false;
        // One mark plane per trace; each attempt starts from an empty set.
        let mut visited = VisitedSet::for_grid(self.grid);
        for (start, ch) in self.grid.cells() {
            if ch != first {
                continue;
            }
            any_start = true;
            counters.start_cells_tried += 1;
            counters.max_depth_reached = counters.max_depth_reached.max(1);

            visited.clear();
            visited.push(self.grid, start);
            if self.extend(start, rest, &mut visited, counters) {
                return Trace::Found(visited.into_path());
            }
        }

        if any_start {
            Trace::Exhausted
        } else {
            Trace::NoStartCell
        }
    }

    /// Extend the path seeded at `start` with `remaining`.
    ///
    /// Depth-first over an explicit stack, one frame per path cell holding the
    /// index of the next direction to try, so word length never bounds the
    /// call stack. On success `visited` holds the full path. On failure only
    /// `start` is left in `visited`.
    fn extend(
        &self,
        start: Coord,
        remaining: &[char],
        visited: &mut VisitedSet,
        counters: &mut SearchCountersV1,
    ) -> bool {
        let mut stack: Vec<(Coord, usize)> = Vec::with_capacity(remaining.len() + 1);
        stack.push((start, 0));

        loop {
            let depth = stack.len();
            let Some((at, next_dir)) = stack.last_mut() else {
                return false;
            };
            let Some(&next) = remaining.get(depth - 1) else {
                return true;
            };
            let Some(&dir) = self.policy.direction_order.get(*next_dir) else {
                stack.pop();
                if stack.is_empty() {
                    return false;
                }
                visited.pop();
                counters.backtracks += 1;
                continue;
            };
            *next_dir += 1;

            let neighbor = at.step(dir);
            // Border cells are `None` and never match.
            if self.grid.cell(neighbor) != Some(next) || !visited.push(self.grid, neighbor) {
                continue;
            }
            counters.steps_taken += 1;
            counters.max_depth_reached = counters
                .max_depth_reached
                .max(u64::try_from(visited.len()).unwrap_or(u64::MAX));
            stack.push((neighbor, 0));
        }
    }
}
