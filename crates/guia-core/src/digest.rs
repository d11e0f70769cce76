//! # Integrity Digest
//!
//! SHA-256 digest of a document's canonical serialized content, used for
//! tamper detection. A record is authentic only while the digest stored at
//! issuance equals the digest recomputed from the record's current content.
//!
//! ## Invariant
//!
//! [`sha256_digest()`] accepts only `&CanonicalBytes`, never raw `&[u8]`.
//! Passing bytes from any other serialization path is a compile error, so
//! issuance and verification cannot disagree on the byte sequence they hash.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::canonical::CanonicalBytes;
use crate::error::DigestParseError;

/// A 256-bit integrity digest, rendered as 64 lowercase hex characters.
///
/// Stored inside each issued document and embedded in its QR payload.
/// Comparison is plain equality; this is an integrity check, not a secret
/// comparison.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IntegrityDigest(String);

impl IntegrityDigest {
    /// Parse a digest from its hex representation.
    ///
    /// Accepts upper- or lowercase hex and normalizes to lowercase, the
    /// form produced at issuance.
    ///
    /// # Errors
    ///
    /// Rejects strings that are not exactly 64 hex characters.
    pub fn parse(s: &str) -> Result<Self, DigestParseError> {
        let s = s.trim();
        if s.len() != 64 {
            return Err(DigestParseError::WrongLength(s.len()));
        }
        if let Some(c) = s.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(DigestParseError::InvalidCharacter(c));
        }
        Ok(Self(s.to_ascii_lowercase()))
    }

    /// The digest as a lowercase hex string slice.
    pub fn as_hex(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for IntegrityDigest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Compute the SHA-256 integrity digest of canonical bytes.
pub fn sha256_digest(data: &CanonicalBytes) -> IntegrityDigest {
    let hash = Sha256::digest(data.as_bytes());
    let hex: String = hash.iter().map(|b| format!("{b:02x}")).collect();
    IntegrityDigest(hex)
}

/// Convenience wrapper returning the digest as an owned hex string.
pub fn sha256_hex(data: &CanonicalBytes) -> String {
    sha256_digest(data).0
}
