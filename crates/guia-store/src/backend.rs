//! # Storage Backend Contract
//!
//! The string key/value contract the rest of the workspace persists
//! through, modeled on the browser localStorage interface: values are
//! opaque strings, writes replace the whole value, last write wins.

use thiserror::Error;

/// Errors from the storage layer.
///
/// Read/write failures are fatal to the operation that triggered them;
/// callers surface them and do not retry.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Underlying persistence read/write failed.
    #[error("storage failure: {0}")]
    Io(#[from] std::io::Error),

    /// A value could not be serialized for writing.
    #[error("serialization failure: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// A client-local string key/value store.
///
/// Implementations must guarantee that a concurrent reader never observes
/// a partially written value for a key; interleaved writers are otherwise
/// last-write-wins, matching the single-logical-writer usage of the
/// system.
pub trait StorageBackend {
    /// Read the value stored under `key`, if any.
    fn load(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write `value` under `key`, replacing any previous value.
    fn save(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove the value stored under `key`. Removing an absent key is not
    /// an error.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}
