//! # guia-store — Client-Local Persistence
//!
//! All state lives in client-local key-value storage: string keys,
//! JSON-serialized string values, one device, one logical writer. This
//! crate makes that contract an explicit, injectable abstraction instead
//! of an implicit global.
//!
//! ## Layers
//!
//! - [`StorageBackend`] — the raw string key/value contract
//!   (`load`/`save`/`remove`).
//! - [`FileBackend`] — durable backend: one `<key>.json` file per
//!   collection under a data directory, written atomically.
//! - [`MemoryBackend`] — volatile backend for tests and tooling.
//! - [`Collection`] — a typed view of one key: the whole value is read,
//!   deserialized, modified, and written back as a unit.
//!
//! ## Corruption Policy
//!
//! A value that fails to deserialize is logged and treated as the empty
//! collection. Durable I/O failures are propagated to the caller
//! unchanged; nothing is retried.

pub mod backend;
pub mod collection;
pub mod file;
pub mod memory;

pub use backend::{StorageBackend, StoreError};
pub use collection::Collection;
pub use file::FileBackend;
pub use memory::MemoryBackend;
