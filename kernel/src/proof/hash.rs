//! Canonical hashing: `ContentHash` and the single `canonical_hash` entry point.
//!
//! Algorithm: SHA-256 over `domain_bytes || data`, rendered as
//! `"sha256:<lowercase hex>"`.

use sha2::{Digest, Sha256};

use super::hash_domain::HashDomain;

/// Algorithm tag carried by every hash this module produces.
pub const HASH_ALGORITHM: &str = "sha256";

/// A content-addressed hash with algorithm identifier.
///
/// Format: `"sha256:<64 lowercase hex>"`. Only [`canonical_hash`] builds one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentHash {
    full: String,
}

impl ContentHash {
    /// The full string representation (`"algorithm:hex_digest"`).
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.full
    }
}

impl std::fmt::Display for ContentHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.full)
    }
}

/// Compute the canonical hash of `data` under `domain`.
#[must_use]
pub fn canonical_hash(domain: HashDomain, data: &[u8]) -> ContentHash {
    let mut hasher = Sha256::new();
    hasher.update(domain.as_bytes());
    hasher.update(data);
    let digest = hex::encode(hasher.finalize());
    ContentHash {
        full: format!("{HASH_ALGORITHM}:{digest}"),
    }
}
