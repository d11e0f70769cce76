//! # guia-docs — Transfer-Document Domain Core
//!
//! Records, stores, and services for issuing and verifying Mozambican
//! school transfer documents ("guias de transferência").
//!
//! ## Flow
//!
//! Issuance: draw a free [`ShortId`] → stamp today's [`IssueDate`] →
//! digest the canonical `{estudante, dataEmissao, idCurto}` triple →
//! build the QR payload → persist the assembled [`DocumentRecord`].
//!
//! Verification: normalize the identifier → look the record up (absent is
//! a distinct outcome from tampered) → recompute the digest over the
//! stored content → compare with the digest stored at issuance.
//!
//! ## Persisted Layout
//!
//! Field and key names keep the established Portuguese storage layout
//! (`documentosEmitidos`, `estudante`, `notas`, ...) so existing exported
//! data remains readable. Rust identifiers are English; serde renames
//! bridge the two.
//!
//! [`ShortId`]: guia_core::ShortId
//! [`IssueDate`]: guia_core::IssueDate

pub mod actor;
pub mod document;
pub mod issuance;
pub mod notification;
pub mod payload;
pub mod store;
pub mod student;
pub mod transfer;
pub mod verification;

pub use actor::{Actor, Role};
pub use document::DocumentRecord;
pub use issuance::{IssuanceService, IssueError};
pub use notification::Notification;
pub use payload::{decode as decode_payload, encode as encode_payload, PayloadError};
pub use store::{
    DocumentStore, NotificationStore, RequestUpdateError, SessionStore, TransferRequestStore,
};
pub use student::{AcademicTrack, StudentRecord};
pub use transfer::{RequestStatus, TransferError, TransferRequest};
pub use verification::{Verification, VerificationService, VerifyError};
