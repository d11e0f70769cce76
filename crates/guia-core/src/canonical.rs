//! # Canonical Serialization
//!
//! Defines [`CanonicalBytes`], the sole construction path for bytes used in
//! integrity-digest computation.
//!
//! ## Invariant
//!
//! The newtype has a private inner field; the only constructor is
//! [`CanonicalBytes::new()`], which validates the value tree and then
//! serializes it with `serde_jcs` (RFC 8785: sorted keys, compact
//! separators, deterministic number rendering). A document hashed at
//! issuance and re-hashed at verification therefore always sees the same
//! byte sequence, regardless of field declaration order or map iteration
//! order in between.
//!
//! ## Float Rejection
//!
//! Subject scores and other numeric-looking values are persisted as
//! strings. A float smuggled into a record would round-trip through JSON
//! with no stable textual form, so canonicalization rejects floats
//! outright instead of hashing an unstable representation.

use serde::Serialize;
use serde_json::Value;

use crate::error::CanonicalizationError;

/// Bytes produced exclusively by JCS-compatible canonicalization.
///
/// # Invariants
///
/// - The only constructor is [`CanonicalBytes::new()`].
/// - No float values anywhere in the tree.
/// - Serialization uses sorted keys with compact separators (RFC 8785).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalBytes(Vec<u8>);

impl CanonicalBytes {
    /// Construct canonical bytes from any serializable value.
    ///
    /// # Errors
    ///
    /// Returns [`CanonicalizationError::FloatRejected`] if the value
    /// contains a float, or [`CanonicalizationError::SerializationFailed`]
    /// if JCS serialization fails.
    pub fn new(obj: &impl Serialize) -> Result<Self, CanonicalizationError> {
        let value = serde_json::to_value(obj)?;
        reject_floats(&value)?;
        let s = serde_jcs::to_string(&value)?;
        Ok(Self(s.into_bytes()))
    }

    /// Access the canonical bytes for digest computation.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Length of the canonical byte sequence.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the canonical byte sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<[u8]> for CanonicalBytes {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Walk the JSON value tree and reject any float leaf.
fn reject_floats(value: &Value) -> Result<(), CanonicalizationError> {
    match value {
        Value::Null | Value::Bool(_) | Value::String(_) => Ok(()),
        Value::Number(n) => {
            if n.is_f64() && !n.is_i64() && !n.is_u64() {
                if let Some(f) = n.as_f64() {
                    return Err(CanonicalizationError::FloatRejected(f));
                }
            }
            Ok(())
        }
        Value::Object(map) => map.values().try_for_each(reject_floats),
        Value::Array(arr) => arr.iter().try_for_each(reject_floats),
    }
}
