//! Snake Kernel: the validated grid and canonical hashing for snake word search.
//!
//! # API Surface
//!
//! - [`grid::grid::Grid`] -- validated rectangular character grid
//! - [`grid::bordered::BorderedGrid`] -- the grid wrapped in a sentinel ring
//! - [`proof::hash::canonical_hash`] -- domain-separated SHA-256
//! - [`proof::canon::canonical_json_bytes`] -- canonical JSON for hashing
//!
//! # Module Dependency Direction
//!
//! `proof` ← `grid`
//!
//! One-way only. `grid` uses `proof` for fingerprints; `proof` imports
//! nothing internal.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod grid;
pub mod proof;
