//! Canonical JSON bytes: the single serialization-for-hashing implementation.
//!
//! # Canonicalization rules
//!
//! 1. Object keys are sorted lexicographically (byte order).
//! 2. Compact form, no whitespace (`{"a":1,"b":2}`).
//! 3. Numbers must be integers (`i64` or `u64`); floats are rejected.
//! 4. Output is always valid UTF-8.
//!
//! `serde_json` is built without `preserve_order`, so `Value::Object` is a
//! `BTreeMap` and its serializer already emits sorted, compact output. This
//! module adds the integer-only gate on top.

/// Error type for canonical JSON serialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CanonError {
    /// A JSON number was not an integer (float, NaN, Infinity).
    NonIntegerNumber { raw: String },
    /// `serde_json` refused to serialize the value.
    Serialize { detail: String },
}

impl std::fmt::Display for CanonError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonIntegerNumber { raw } => {
                write!(f, "non-integer number in canonical JSON: {raw}")
            }
            Self::Serialize { detail } => {
                write!(f, "canonical JSON serialization failed: {detail}")
            }
        }
    }
}

impl std::error::Error for CanonError {}

/// Produce canonical JSON bytes from a `serde_json::Value`.
///
/// # Errors
///
/// Returns [`CanonError::NonIntegerNumber`] if any number in `value` is not
/// representable as `i64` or `u64`.
pub fn canonical_json_bytes(value: &serde_json::Value) -> Result<Vec<u8>, CanonError> {
    reject_non_integers(value)?;
    serde_json::to_vec(value).map_err(|e| CanonError::Serialize {
        detail: e.to_string(),
    })
}

fn reject_non_integers(value: &serde_json::Value) -> Result<(), CanonError> {
    match value {
        serde_json::Value::Number(n) if n.as_i64().is_none() && n.as_u64().is_none() => {
            Err(CanonError::NonIntegerNumber { raw: n.to_string() })
        }
        serde_json::Value::Array(items) => items.iter().try_for_each(reject_non_integers),
        serde_json::Value::Object(map) => map.values().try_for_each(reject_non_integers),
        _ => Ok(()),
    }
}
