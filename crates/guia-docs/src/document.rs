//! # Document Record
//!
//! An issued transfer document: the embedded student record plus issuance
//! metadata, the integrity digest, and the derived QR payload.
//!
//! ## Integrity Invariant
//!
//! `digest == sha256(canonical({estudante, dataEmissao, idCurto}))` must
//! hold for a record to be authentic. The digest input is exactly those
//! three components — nothing more — so reissuing metadata such as the
//! school name does not silently change a student's hash, while any edit
//! to the embedded student record, the issuance date, or the identifier
//! is detected on re-verification.

use serde::{Deserialize, Serialize};

use guia_core::{sha256_digest, CanonicalBytes, CanonicalizationError, IntegrityDigest};
use guia_core::{IssueDate, ShortId};

use crate::student::{AcademicTrack, StudentRecord};

/// The canonical digest input: the fields covered by tamper detection.
///
/// Serialization of this struct (JCS-canonicalized) is the byte sequence
/// hashed at issuance and re-hashed at verification. Renaming a field or
/// adding one is a breaking change for every document already issued.
#[derive(Serialize)]
struct DigestInput<'a> {
    #[serde(rename = "estudante")]
    student: &'a StudentRecord,
    #[serde(rename = "dataEmissao")]
    issue_date: &'a IssueDate,
    #[serde(rename = "idCurto")]
    short_id: &'a ShortId,
}

/// An issued transfer document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DocumentRecord {
    /// Internal record identifier.
    pub id: String,

    /// Public 8-character reference, also the storage key.
    #[serde(rename = "idCurto")]
    pub short_id: ShortId,

    /// The student this document certifies. Covered by the digest.
    #[serde(rename = "estudante")]
    pub student: StudentRecord,

    /// Calendar date of issuance. Covered by the digest.
    #[serde(rename = "dataEmissao")]
    pub issue_date: IssueDate,

    /// Name of the issuing school.
    #[serde(rename = "escolaOrigem")]
    pub origin_school: String,

    /// City of the issuing school.
    #[serde(rename = "cidadeOrigem")]
    pub origin_city: String,

    /// Academic track, duplicated from the student record for listings.
    #[serde(rename = "nivelAcademico")]
    pub track: AcademicTrack,

    /// Integrity digest computed at issuance.
    #[serde(rename = "hashIntegridade")]
    pub digest: IntegrityDigest,

    /// QR payload string, derived from `idCurto` and `hashIntegridade`.
    /// Carried for rendering convenience; never the source of truth.
    #[serde(rename = "qrPayload")]
    pub qr_payload: String,
}

impl DocumentRecord {
    /// Recompute the integrity digest from this record's current content.
    ///
    /// Equal to [`digest`](Self::digest) exactly when the record is
    /// untampered since issuance.
    pub fn recompute_digest(&self) -> Result<IntegrityDigest, CanonicalizationError> {
        compute_digest(&self.student, &self.issue_date, &self.short_id)
    }
}

/// Compute the integrity digest for a document's covered fields.
///
/// Used at issuance (before the record exists) and at verification
/// (from the stored record). Both paths must go through this function;
/// a second serialization path would defeat tamper detection.
pub fn compute_digest(
    student: &StudentRecord,
    issue_date: &IssueDate,
    short_id: &ShortId,
) -> Result<IntegrityDigest, CanonicalizationError> {
    let input = DigestInput {
        student,
        issue_date,
        short_id,
    };
    let canonical = CanonicalBytes::new(&input)?;
    Ok(sha256_digest(&canonical))
}
