//! # guia-cli — Command-Line Interface
//!
//! Thin shell over `guia-docs`: argument parsing and human-readable
//! output live here, business logic stays in the domain crates. Every
//! subcommand operates on the same local data directory, so issuing,
//! verifying, and request handling all see one consistent store.
//!
//! ## Subcommands
//!
//! - `issue` — issue a transfer document for a student
//! - `verify` — check a document by short identifier or QR payload
//! - `list` — list issued documents
//! - `request` — file and decide transfer requests
//! - `session` — set, show, or clear the signed-in actor
//! - `notifications` — list and acknowledge notifications

pub mod issue;
pub mod list;
pub mod notify;
pub mod request;
pub mod session;
pub mod verify;
