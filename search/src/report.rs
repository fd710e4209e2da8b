//! `SnakeReportV1`: the audit record of one search.
//!
//! The report binds the outcome to the exact grid (by fingerprint) and
//! policy it came from. Same grid, word and policy always produce
//! byte-identical canonical JSON, and therefore the same digest.

use snake_kernel::grid::coord::Coord;
use snake_kernel::proof::canon::{canonical_json_bytes, CanonError};
use snake_kernel::proof::hash::{canonical_hash, ContentHash};
use snake_kernel::proof::hash_domain::HashDomain;

use crate::policy::SnakePolicyV1;

/// Why the search stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReasonV1 {
    /// The word is empty; the empty path matches trivially.
    EmptyWord,
    /// A full self-avoiding path was traced from `start`.
    PathFound { start: Coord },
    /// Every cell matching the first character was tried without success.
    StartCellsExhausted,
    /// No cell matches the first character.
    NoStartCell,
}

impl TerminationReasonV1 {
    /// Stable tag used in serialized reports.
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::EmptyWord => "empty_word",
            Self::PathFound { .. } => "path_found",
            Self::StartCellsExhausted => "start_cells_exhausted",
            Self::NoStartCell => "no_start_cell",
        }
    }
}

/// Work counters accumulated over one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchCountersV1 {
    /// Start cells whose character matched `word[0]` and were attempted.
    pub start_cells_tried: u64,
    /// Successful neighbour extensions (visited-set pushes after a start).
    pub steps_taken: u64,
    /// Extensions undone after their subtree failed.
    pub backtracks: u64,
    /// Longest partial path, in cells, seen during the search.
    pub max_depth_reached: u64,
}

/// The complete outcome of a search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnakeReportV1 {
    pub word: String,
    /// Fingerprint of the searched grid.
    pub grid_fingerprint: ContentHash,
    pub policy: SnakePolicyV1,
    pub termination: TerminationReasonV1,
    /// Traced cells in word order; empty unless a path was found.
    pub path: Vec<Coord>,
    pub counters: SearchCountersV1,
}

impl SnakeReportV1 {
    /// True if the word is present (including the empty word).
    #[must_use]
    pub fn is_found(&self) -> bool {
        matches!(
            self.termination,
            TerminationReasonV1::EmptyWord | TerminationReasonV1::PathFound { .. }
        )
    }

    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        let mut termination = serde_json::json!({ "kind": self.termination.tag() });
        if let TerminationReasonV1::PathFound { start } = self.termination {
            termination["start"] = coord_json(start);
        }
        serde_json::json!({
            "schema_version": "snake_report.v1",
            "word": self.word,
            "grid_fingerprint": self.grid_fingerprint.as_str(),
            "policy": self.policy.to_json_value(),
            "found": self.is_found(),
            "termination": termination,
            "path": self.path.iter().copied().map(coord_json).collect::<Vec<_>>(),
            "counters": {
                "start_cells_tried": self.counters.start_cells_tried,
                "steps_taken": self.counters.steps_taken,
                "backtracks": self.counters.backtracks,
                "max_depth_reached": self.counters.max_depth_reached,
            },
        })
    }

    /// Serialize the report to canonical JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if serialization fails.
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, CanonError> {
        canonical_json_bytes(&self.to_json_value())
    }

    /// Content hash of the canonical JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if serialization fails.
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        let bytes = self.to_canonical_json_bytes()?;
        Ok(canonical_hash(HashDomain::SnakeReport, &bytes))
    }
}

fn coord_json(coord: Coord) -> serde_json::Value {
    serde_json::json!({ "row": coord.row, "col": coord.col })
}
