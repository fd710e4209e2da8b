//! Proof module: canonical hashing and canonical JSON bytes.
//!
//! Depends on nothing else in the kernel. `grid` depends on `proof` for its
//! fingerprint.

pub mod canon;
pub mod hash;
pub mod hash_domain;
