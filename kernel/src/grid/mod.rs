//! Grid module: the validated character grid and its sentinel-bordered view.
//!
//! `error` ← `grid` ← `bordered`; `coord` is shared by all three.

pub mod bordered;
pub mod coord;
pub mod error;
#[allow(clippy::module_inception)]
pub mod grid;
