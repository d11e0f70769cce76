//! # Transfer Request Lifecycle
//!
//! A student's request to transfer schools. Requests start pending and are
//! decided exactly once by a director:
//!
//! ```text
//! Pending ──▶ Approved (terminal)
//!    │
//!    └─────▶ Rejected (terminal)
//! ```
//!
//! Re-deciding a decided request is rejected with a structured error.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Status of a transfer request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    /// Awaiting a director's decision.
    Pending,
    /// Approved by a director (terminal).
    Approved,
    /// Rejected by a director (terminal).
    Rejected,
}

impl RequestStatus {
    /// Whether this status admits no further transition.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Pending)
    }
}

impl std::fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => f.write_str("pending"),
            Self::Approved => f.write_str("approved"),
            Self::Rejected => f.write_str("rejected"),
        }
    }
}

/// Errors from transfer-request transitions.
#[derive(Error, Debug)]
pub enum TransferError {
    /// The request has already been decided.
    #[error("request {id} is already {status} and cannot be decided again")]
    AlreadyDecided {
        /// The request identifier.
        id: String,
        /// The terminal status it holds.
        status: RequestStatus,
    },
}

/// A student's request to transfer to another school.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferRequest {
    /// Internal request identifier.
    pub id: String,

    /// School the student is leaving.
    #[serde(rename = "escolaOrigem")]
    pub origin_school: String,

    /// School the student wants to join.
    #[serde(rename = "escolaDestino")]
    pub destination_school: String,

    /// Name of the requesting student.
    #[serde(rename = "nomeSolicitante")]
    pub requester_name: String,

    /// Grade level ("classe") of the student.
    #[serde(rename = "classe")]
    pub grade_level: String,

    /// National identity number of the student.
    #[serde(rename = "numeroBi")]
    pub id_number: String,

    /// Free-text reason for the transfer.
    #[serde(rename = "motivo")]
    pub reason: String,

    /// Date the request was filed, ISO `YYYY-MM-DD`.
    #[serde(rename = "dataSolicitacao")]
    pub request_date: String,

    /// Current lifecycle status.
    pub status: RequestStatus,
}

impl TransferRequest {
    /// File a new pending request, dated today on the local clock.
    pub fn new(
        origin_school: impl Into<String>,
        destination_school: impl Into<String>,
        requester_name: impl Into<String>,
        grade_level: impl Into<String>,
        id_number: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            origin_school: origin_school.into(),
            destination_school: destination_school.into(),
            requester_name: requester_name.into(),
            grade_level: grade_level.into(),
            id_number: id_number.into(),
            reason: reason.into(),
            request_date: chrono::Local::now().date_naive().format("%Y-%m-%d").to_string(),
            status: RequestStatus::Pending,
        }
    }

    /// Approve a pending request (Pending → Approved).
    pub fn approve(&mut self) -> Result<(), TransferError> {
        self.decide(RequestStatus::Approved)
    }

    /// Reject a pending request (Pending → Rejected).
    pub fn reject(&mut self) -> Result<(), TransferError> {
        self.decide(RequestStatus::Rejected)
    }

    fn decide(&mut self, to: RequestStatus) -> Result<(), TransferError> {
        if self.status.is_terminal() {
            return Err(TransferError::AlreadyDecided {
                id: self.id.clone(),
                status: self.status,
            });
        }
        self.status = to;
        Ok(())
    }
}
