//! Search policy types.

use snake_kernel::grid::coord::Direction;
use snake_kernel::proof::canon::{canonical_json_bytes, CanonError};
use snake_kernel::proof::hash::{canonical_hash, ContentHash};
use snake_kernel::proof::hash_domain::HashDomain;

use crate::error::SearchError;

/// Search configuration.
///
/// The direction order decides which path is found first when several
/// exist. It never changes whether a word is found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnakePolicyV1 {
    /// Order in which neighbours are tried at every step.
    pub direction_order: [Direction; 4],
}

impl SnakePolicyV1 {
    /// Validate that `direction_order` names each direction exactly once.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] if a direction is repeated
    /// (and therefore another one is missing).
    pub fn validate(&self) -> Result<(), SearchError> {
        for dir in Direction::ALL {
            let count = self.direction_order.iter().filter(|&&d| d == dir).count();
            if count != 1 {
                return Err(SearchError::InvalidPolicy {
                    detail: format!(
                        "direction_order must contain {dir} exactly once, found {count}"
                    ),
                });
            }
        }
        Ok(())
    }

    /// JSON projection used in reports and the policy digest.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "direction_order": self
                .direction_order
                .iter()
                .map(|d| d.as_str())
                .collect::<Vec<_>>(),
        })
    }

    /// Content hash of the canonical JSON projection.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if canonical serialization fails.
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        let bytes = canonical_json_bytes(&self.to_json_value())?;
        Ok(canonical_hash(HashDomain::SearchPolicy, &bytes))
    }
}

impl Default for SnakePolicyV1 {
    fn default() -> Self {
        Self {
            direction_order: Direction::ALL,
        }
    }
}
