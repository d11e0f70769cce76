//! # Error Types
//!
//! Error enums for the core primitives. All errors use `thiserror` for
//! derive-based `Display` and `Error` implementations. Higher layers wrap
//! these with their own enums rather than stringifying them.

use thiserror::Error;

/// Error during canonical serialization.
#[derive(Error, Debug)]
pub enum CanonicalizationError {
    /// Float values are not permitted in canonical representations.
    /// Scores and amounts are stored as strings or integers.
    #[error("float values are not permitted in canonical representations: {0}")]
    FloatRejected(f64),

    /// JSON serialization failed.
    #[error("serialization failed: {0}")]
    SerializationFailed(#[from] serde_json::Error),
}

/// Error constructing or parsing a short document identifier.
#[derive(Error, Debug)]
pub enum IdentifierError {
    /// The identifier does not have exactly 8 characters.
    #[error("short identifier must be 8 characters, got {0}")]
    WrongLength(usize),

    /// The identifier contains a character outside `[A-Z0-9]`.
    #[error("short identifier contains invalid character {0:?}")]
    InvalidCharacter(char),
}

/// Error parsing a stored or transmitted integrity digest.
#[derive(Error, Debug)]
pub enum DigestParseError {
    /// The hex string does not have exactly 64 characters.
    #[error("integrity digest must be 64 hex characters, got {0}")]
    WrongLength(usize),

    /// The string contains a non-hexadecimal character.
    #[error("integrity digest contains non-hex character {0:?}")]
    InvalidCharacter(char),
}
