//! # Short Document Identifier
//!
//! The 8-character public reference code for an issued document, also used
//! as the storage key. Charset `[A-Z0-9]`, generated from a
//! non-cryptographic random source.
//!
//! Generation alone carries no uniqueness guarantee; the issuance service
//! pairs it with a store existence check and re-draws on collision.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::IdentifierError;

/// Characters a short identifier may contain.
const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Length of every short identifier.
pub const SHORT_ID_LEN: usize = 8;

/// An 8-character uppercase alphanumeric document reference.
///
/// The inner string is private and only reachable through [`generate()`]
/// or [`parse()`], so every `ShortId` in the system satisfies
/// `[A-Z0-9]{8}`.
///
/// [`generate()`]: ShortId::generate
/// [`parse()`]: ShortId::parse
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShortId(String);

impl ShortId {
    /// Draw a fresh random identifier from the given source.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let id: String = (0..SHORT_ID_LEN)
            .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
            .collect();
        Self(id)
    }

    /// Parse an identifier from user input.
    ///
    /// Trims surrounding whitespace and normalizes to uppercase before
    /// validating, so `"ab12cd34"` and `" AB12CD34 "` both resolve to the
    /// same identifier.
    ///
    /// # Errors
    ///
    /// Rejects input that is not exactly 8 characters of `[A-Z0-9]` after
    /// normalization.
    pub fn parse(s: &str) -> Result<Self, IdentifierError> {
        let normalized = s.trim().to_ascii_uppercase();
        if normalized.chars().count() != SHORT_ID_LEN {
            return Err(IdentifierError::WrongLength(normalized.chars().count()));
        }
        if let Some(c) = normalized
            .chars()
            .find(|c| !c.is_ascii_uppercase() && !c.is_ascii_digit())
        {
            return Err(IdentifierError::InvalidCharacter(c));
        }
        Ok(Self(normalized))
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ShortId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ShortId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    proptest! {
        /// Every generated identifier matches `[A-Z0-9]{8}`.
        #[test]
        fn generated_ids_match_charset(seed in any::<u64>()) {
            let mut rng = StdRng::seed_from_u64(seed);
            let id = ShortId::generate(&mut rng);
            prop_assert_eq!(id.as_str().len(), SHORT_ID_LEN);
            prop_assert!(id.as_str().chars().all(|c| ALPHABET.contains(&(c as u8))));
        }

        /// Parsing is idempotent on already-valid identifiers.
        #[test]
        fn parse_idempotent(s in "[A-Z0-9]{8}") {
            let once = ShortId::parse(&s).unwrap();
            let twice = ShortId::parse(once.as_str()).unwrap();
            prop_assert_eq!(once, twice);
        }
    }
}
