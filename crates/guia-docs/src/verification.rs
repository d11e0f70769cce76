//! # Document Verification
//!
//! Recomputes a stored document's integrity digest and compares it with
//! the digest recorded at issuance. Three terminal outcomes:
//!
//! - [`Absent`](Verification::Absent) — no record under the identifier;
//!   reported distinctly from tampering.
//! - [`Valid`](Verification::Valid) — digests equal; the record is
//!   returned for display.
//! - [`Tampered`](Verification::Tampered) — digests differ; the record is
//!   still returned so the verifier can inspect what changed.
//!
//! A single lookup-and-compare pass is the entire protocol; there are no
//! retries. Digest comparison is plain equality — the digest is not a
//! secret, so constant-time comparison buys nothing here.

use guia_core::{CanonicalizationError, ShortId};
use guia_store::{StorageBackend, StoreError};

use crate::document::DocumentRecord;
use crate::payload::{self, PayloadError};
use crate::store::DocumentStore;

/// Outcome of verifying a document.
#[derive(Debug, Clone, PartialEq)]
pub enum Verification {
    /// No document is stored under the identifier.
    Absent,
    /// The stored document matches its issuance digest.
    Valid(DocumentRecord),
    /// The stored document no longer matches its issuance digest.
    Tampered(DocumentRecord),
}

impl Verification {
    /// The record involved, when one was found.
    pub fn record(&self) -> Option<&DocumentRecord> {
        match self {
            Self::Absent => None,
            Self::Valid(r) | Self::Tampered(r) => Some(r),
        }
    }

    /// Whether the outcome is `Valid`.
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }
}

/// Errors from document verification.
#[derive(thiserror::Error, Debug)]
pub enum VerifyError {
    /// Storage layer failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The stored record could not be canonicalized for re-digesting.
    #[error(transparent)]
    Canonicalization(#[from] CanonicalizationError),

    /// A scanned QR payload was malformed.
    #[error(transparent)]
    Payload(#[from] PayloadError),
}

/// Verifies documents against an injected document store.
#[derive(Debug)]
pub struct VerificationService<'a, B> {
    documents: DocumentStore<'a, B>,
}

impl<'a, B: StorageBackend> VerificationService<'a, B> {
    /// Create a service reading from the given store.
    pub fn new(documents: DocumentStore<'a, B>) -> Self {
        Self { documents }
    }

    /// Verify a document by its short identifier.
    ///
    /// The input is normalized (trimmed, uppercased) before lookup. Input
    /// that cannot be a short identifier at all reports `Absent`: nothing
    /// under that reference can exist in the store.
    pub fn verify(&self, raw_id: &str) -> Result<Verification, VerifyError> {
        let short_id = match ShortId::parse(raw_id) {
            Ok(id) => id,
            Err(e) => {
                tracing::debug!(input = raw_id, error = %e, "unparseable identifier");
                return Ok(Verification::Absent);
            }
        };
        self.verify_id(&short_id)
    }

    /// Verify a document from a scanned QR payload.
    ///
    /// Stricter than [`verify()`](Self::verify): besides recomputing the
    /// stored record's digest, the digest half embedded in the payload
    /// must equal the recomputed one. A forged payload over an intact
    /// record therefore reports `Tampered` instead of leaning on the
    /// payload's own claim.
    pub fn verify_payload(&self, raw_payload: &str) -> Result<Verification, VerifyError> {
        let (short_id, claimed) = payload::decode(raw_payload)?;
        let Some(record) = self.documents.get(&short_id)? else {
            return Ok(Verification::Absent);
        };
        let recomputed = record.recompute_digest()?;
        if recomputed != record.digest || claimed != recomputed {
            tracing::warn!(short_id = %short_id, "integrity mismatch on payload verification");
            return Ok(Verification::Tampered(record));
        }
        Ok(Verification::Valid(record))
    }

    fn verify_id(&self, short_id: &ShortId) -> Result<Verification, VerifyError> {
        let Some(record) = self.documents.get(short_id)? else {
            return Ok(Verification::Absent);
        };
        let recomputed = record.recompute_digest()?;
        if recomputed == record.digest {
            Ok(Verification::Valid(record))
        } else {
            tracing::warn!(short_id = %short_id, "integrity mismatch on verification");
            Ok(Verification::Tampered(record))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::issuance::IssuanceService;
    use crate::student::{AcademicTrack, StudentRecord};
    use guia_store::MemoryBackend;
    use std::collections::BTreeMap;

    fn student() -> StudentRecord {
        StudentRecord {
            full_name: "Maria Silva".to_string(),
            id_number: "987654321".to_string(),
            enrollment_date: "2023-02-01".to_string(),
            grade_level: "11".to_string(),
            track: AcademicTrack::Secondary,
            grades: BTreeMap::from([("matematica".to_string(), "15".to_string())]),
            remarks: String::new(),
        }
    }

    #[test]
    fn test_verify_issued_document_is_valid() {
        let backend = MemoryBackend::new();
        let issued = IssuanceService::new(DocumentStore::new(&backend))
            .issue(student(), "Escola A", "Maputo")
            .unwrap();

        let outcome = VerificationService::new(DocumentStore::new(&backend))
            .verify(issued.short_id.as_str())
            .unwrap();
        assert_eq!(outcome, Verification::Valid(issued));
        assert!(outcome.is_valid());
    }

    #[test]
    fn test_verify_normalizes_input() {
        let backend = MemoryBackend::new();
        let issued = IssuanceService::new(DocumentStore::new(&backend))
            .issue(student(), "Escola A", "Maputo")
            .unwrap();

        let sloppy = format!("  {}  ", issued.short_id.as_str().to_ascii_lowercase());
        let outcome = VerificationService::new(DocumentStore::new(&backend))
            .verify(&sloppy)
            .unwrap();
        assert!(outcome.is_valid());
    }

    #[test]
    fn test_verify_absent_on_empty_store() {
        let backend = MemoryBackend::new();
        let service = VerificationService::new(DocumentStore::new(&backend));
        assert_eq!(service.verify("ZZZZZZZZ").unwrap(), Verification::Absent);
    }

    #[test]
    fn test_verify_unparseable_input_is_absent() {
        let backend = MemoryBackend::new();
        let service = VerificationService::new(DocumentStore::new(&backend));
        assert_eq!(service.verify("not an id").unwrap(), Verification::Absent);
        assert_eq!(service.verify("").unwrap(), Verification::Absent);
    }

    #[test]
    fn test_verify_detects_tampered_store() {
        let backend = MemoryBackend::new();
        let mut issued = IssuanceService::new(DocumentStore::new(&backend))
            .issue(student(), "Escola A", "Maputo")
            .unwrap();

        // Bump a grade directly in the store, as a hand-edit would.
        issued
            .student
            .grades
            .insert("matematica".to_string(), "20".to_string());
        DocumentStore::new(&backend).put(&issued).unwrap();

        let outcome = VerificationService::new(DocumentStore::new(&backend))
            .verify(issued.short_id.as_str())
            .unwrap();
        match outcome {
            Verification::Tampered(r) => {
                assert_eq!(r.student.grades["matematica"], "20");
            }
            other => panic!("expected Tampered, got {other:?}"),
        }
    }

    #[test]
    fn test_verify_payload_valid() {
        let backend = MemoryBackend::new();
        let issued = IssuanceService::new(DocumentStore::new(&backend))
            .issue(student(), "Escola A", "Maputo")
            .unwrap();

        let outcome = VerificationService::new(DocumentStore::new(&backend))
            .verify_payload(&issued.qr_payload)
            .unwrap();
        assert!(outcome.is_valid());
    }

    #[test]
    fn test_verify_payload_with_forged_digest_is_tampered() {
        let backend = MemoryBackend::new();
        let issued = IssuanceService::new(DocumentStore::new(&backend))
            .issue(student(), "Escola A", "Maputo")
            .unwrap();

        let forged = format!("{}|{}", issued.short_id, "0".repeat(64));
        let outcome = VerificationService::new(DocumentStore::new(&backend))
            .verify_payload(&forged)
            .unwrap();
        assert!(matches!(outcome, Verification::Tampered(_)));
    }

    #[test]
    fn test_verify_payload_unknown_id_is_absent() {
        let backend = MemoryBackend::new();
        let service = VerificationService::new(DocumentStore::new(&backend));
        let payload = format!("ZZZZZZZZ|{}", "a".repeat(64));
        assert_eq!(
            service.verify_payload(&payload).unwrap(),
            Verification::Absent
        );
    }

    #[test]
    fn test_verify_payload_malformed_is_error() {
        let backend = MemoryBackend::new();
        let service = VerificationService::new(DocumentStore::new(&backend));
        assert!(matches!(
            service.verify_payload("garbage"),
            Err(VerifyError::Payload(_))
        ));
    }
}
