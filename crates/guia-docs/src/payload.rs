//! # QR Verification Payload
//!
//! The string embedded in a document's QR code: the short identifier and
//! the integrity digest joined by `|`. External QR-reading software hands
//! the payload back to verification, which uses the identifier for lookup
//! and cross-checks the embedded digest against the freshly recomputed
//! one.

use thiserror::Error;

use guia_core::{DigestParseError, IdentifierError, IntegrityDigest, ShortId};

/// Separator between the identifier and digest halves.
pub const SEPARATOR: char = '|';

/// Errors decoding a QR payload.
#[derive(Error, Debug)]
pub enum PayloadError {
    /// The payload has no `|` separator.
    #[error("payload is missing the '|' separator")]
    MissingSeparator,

    /// The identifier half is malformed.
    #[error("payload identifier: {0}")]
    Identifier(#[from] IdentifierError),

    /// The digest half is malformed.
    #[error("payload digest: {0}")]
    Digest(#[from] DigestParseError),
}

/// Encode a payload as `shortId|digest`.
pub fn encode(short_id: &ShortId, digest: &IntegrityDigest) -> String {
    format!("{short_id}{SEPARATOR}{digest}")
}

/// Decode and validate a payload produced by [`encode`].
///
/// Both halves are normalized the same way direct user input is: the
/// identifier to uppercase, the digest to lowercase hex.
pub fn decode(payload: &str) -> Result<(ShortId, IntegrityDigest), PayloadError> {
    let (id_part, digest_part) = payload
        .trim()
        .split_once(SEPARATOR)
        .ok_or(PayloadError::MissingSeparator)?;
    let short_id = ShortId::parse(id_part)?;
    let digest = IntegrityDigest::parse(digest_part)?;
    Ok((short_id, digest))
}
