//! # Document Issuance
//!
//! Builds, digests, and persists a new transfer document:
//!
//! 1. Draw a short identifier the store does not already hold.
//! 2. Stamp today's calendar date.
//! 3. Digest the canonical `{estudante, dataEmissao, idCurto}` triple.
//! 4. Encode the QR payload.
//! 5. Persist the assembled record and return it.
//!
//! Storage failure aborts the operation and surfaces to the caller;
//! nothing is retried and no partial record is left behind (the store
//! write is the only mutation, and it is atomic per collection).

use uuid::Uuid;

use guia_core::{CanonicalizationError, IssueDate, ShortId};
use guia_store::{StorageBackend, StoreError};

use crate::document::{compute_digest, DocumentRecord};
use crate::payload;
use crate::store::DocumentStore;
use crate::student::StudentRecord;

/// Upper bound on identifier draws per issuance.
///
/// A collision means a random draw hit one of the existing records in a
/// 36^8 space, so consecutive collisions signal a broken RNG rather than
/// a full store. The bound turns that pathology into an error instead of
/// a spin.
pub const MAX_ID_ATTEMPTS: usize = 32;

/// Errors from document issuance.
#[derive(thiserror::Error, Debug)]
pub enum IssueError {
    /// Storage layer failed; the document was not issued.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The student record could not be canonicalized for digesting.
    #[error(transparent)]
    Canonicalization(#[from] CanonicalizationError),

    /// No free short identifier was found within the attempt bound.
    #[error("no free short identifier after {0} attempts")]
    IdentifierSpaceExhausted(usize),
}

/// Issues transfer documents against an injected document store.
#[derive(Debug)]
pub struct IssuanceService<'a, B> {
    documents: DocumentStore<'a, B>,
}

impl<'a, B: StorageBackend> IssuanceService<'a, B> {
    /// Create a service writing to the given store.
    pub fn new(documents: DocumentStore<'a, B>) -> Self {
        Self { documents }
    }

    /// Issue a document dated today on the local device clock.
    pub fn issue(
        &self,
        student: StudentRecord,
        origin_school: &str,
        origin_city: &str,
    ) -> Result<DocumentRecord, IssueError> {
        self.issue_on(student, origin_school, origin_city, IssueDate::today())
    }

    /// Issue a document with an explicit issuance date.
    ///
    /// The date participates in the integrity digest, so tests and
    /// re-issuance tooling pass it explicitly for reproducibility.
    pub fn issue_on(
        &self,
        student: StudentRecord,
        origin_school: &str,
        origin_city: &str,
        issue_date: IssueDate,
    ) -> Result<DocumentRecord, IssueError> {
        let short_id = self.free_short_id()?;
        let digest = compute_digest(&student, &issue_date, &short_id)?;
        let qr_payload = payload::encode(&short_id, &digest);
        let track = student.track;

        let record = DocumentRecord {
            id: Uuid::new_v4().to_string(),
            short_id,
            student,
            issue_date,
            origin_school: origin_school.to_string(),
            origin_city: origin_city.to_string(),
            track,
            digest,
            qr_payload,
        };

        self.documents.put(&record)?;
        tracing::info!(
            short_id = %record.short_id,
            school = origin_school,
            "issued transfer document"
        );
        Ok(record)
    }

    /// Draw identifiers until one is free in the store.
    fn free_short_id(&self) -> Result<ShortId, IssueError> {
        let mut rng = rand::thread_rng();
        for _ in 0..MAX_ID_ATTEMPTS {
            let candidate = ShortId::generate(&mut rng);
            if !self.documents.contains(&candidate)? {
                return Ok(candidate);
            }
            tracing::debug!(candidate = %candidate, "short identifier collision, redrawing");
        }
        Err(IssueError::IdentifierSpaceExhausted(MAX_ID_ATTEMPTS))
    }
}
