//! Lock tests for the snake word search.
//!
//! The integration tests under `tests/` pin the observable contract; the
//! helpers here are shared between them.

#![forbid(unsafe_code)]
