//! # guia-core — Foundational Types for the Guia Transfer-Document System
//!
//! Primitives shared by every other crate in the workspace. This crate
//! depends on nothing internal; it is the leaf of the dependency DAG.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** [`ShortId`] for the
//!    8-character public document reference, [`IssueDate`] for the
//!    time-free issuance date, [`IntegrityDigest`] for the tamper-detection
//!    hash. No bare strings for identifiers or digests.
//!
//! 2. **`CanonicalBytes` newtype.** All digest computation flows through
//!    [`CanonicalBytes::new()`]. No raw `serde_json::to_vec()` for digests,
//!    ever — two serializations of the same record must hash identically
//!    or tamper detection produces false alarms.
//!
//! 3. **`sha256_digest()` accepts only `&CanonicalBytes`.** Compile-time
//!    enforcement that every digest path goes through canonicalization.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `guia-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod canonical;
pub mod digest;
pub mod error;
pub mod ident;
pub mod temporal;

// Re-export primary types for ergonomic imports.
pub use canonical::CanonicalBytes;
pub use digest::{sha256_digest, sha256_hex, IntegrityDigest};
pub use error::{CanonicalizationError, DigestParseError, IdentifierError};
pub use ident::ShortId;
pub use temporal::IssueDate;
