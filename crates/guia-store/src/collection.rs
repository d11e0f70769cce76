//! # Typed Collections
//!
//! A [`Collection`] is a typed view of a single storage key. Every read
//! deserializes the whole value; every write serializes and replaces the
//! whole value. Whole-unit replacement is deliberate: the store is a
//! handful of small collections mutated serially by one user.
//!
//! ## Corruption Policy
//!
//! A stored value that fails to deserialize (e.g. a hand-edited or
//! corrupted file) is logged with `tracing::warn!` and replaced by the
//! empty collection on the next read. I/O failures are propagated.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::backend::{StorageBackend, StoreError};

/// A typed whole-unit view of one storage key.
#[derive(Debug)]
pub struct Collection<'a, B> {
    backend: &'a B,
    key: &'static str,
}

impl<'a, B: StorageBackend> Collection<'a, B> {
    /// Bind a collection to its backend and key.
    pub fn new(backend: &'a B, key: &'static str) -> Self {
        Self { backend, key }
    }

    /// The storage key this collection occupies.
    pub fn key(&self) -> &'static str {
        self.key
    }

    /// Read and deserialize the whole collection.
    ///
    /// An absent key yields `T::default()`. A present but malformed value
    /// is logged and also yields `T::default()`; the corrupt value stays
    /// in place until the next write replaces it.
    pub fn read<T>(&self) -> Result<T, StoreError>
    where
        T: DeserializeOwned + Default,
    {
        match self.backend.load(self.key)? {
            None => Ok(T::default()),
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(value) => Ok(value),
                Err(e) => {
                    tracing::warn!(
                        key = self.key,
                        error = %e,
                        "discarding malformed stored collection"
                    );
                    Ok(T::default())
                }
            },
        }
    }

    /// Serialize and write the whole collection, replacing the previous
    /// value.
    pub fn write<T>(&self, value: &T) -> Result<(), StoreError>
    where
        T: Serialize,
    {
        let raw = serde_json::to_string(value)?;
        self.backend.save(self.key, &raw)
    }

    /// Remove the collection from storage entirely.
    pub fn clear(&self) -> Result<(), StoreError> {
        self.backend.remove(self.key)
    }
}
