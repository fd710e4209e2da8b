//! Snake Search: backtracking word-snake search over a bordered grid.
//!
//! This crate provides the search layer. It depends only on `snake_kernel`.
//!
//! # Crate dependency graph
//!
//! ```text
//! snake_kernel  ←  snake_search
//! (grid, hash)     (searcher, visited set, report)
//! ```
//!
//! # Key types
//!
//! - [`search::SnakeSearcher`] — the searcher; borrows a `BorderedGrid`
//! - [`visited::VisitedSet`] — per-attempt self-avoidance state
//! - [`policy::SnakePolicyV1`] — direction trial order
//! - [`report::SnakeReportV1`] — deterministic audit record of one search
//!
//! The one-call entry point is [`search::contains`].

#![forbid(unsafe_code)]

pub mod error;
pub mod policy;
pub mod report;
pub mod search;
pub mod visited;
