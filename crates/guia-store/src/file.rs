//! # File-Backed Storage
//!
//! Durable [`StorageBackend`] keeping one `<key>.json` file per collection
//! under a data directory.
//!
//! ## Atomicity Invariant
//!
//! Writes land in a temporary file in the same directory and are renamed
//! into place. A reader (or a crash mid-write) therefore only ever sees a
//! complete JSON document for a key, never a torn one.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::backend::{StorageBackend, StoreError};

/// A storage backend rooted at a data directory.
///
/// Keys map to `<root>/<key>.json`. Keys are restricted to
/// `[A-Za-z0-9_-]` so a key can never escape the data directory; the
/// typed stores only use fixed key constants, making violations a
/// programming error rather than an input-validation concern.
#[derive(Debug, Clone)]
pub struct FileBackend {
    root: PathBuf,
}

impl FileBackend {
    /// Create a backend rooted at the given directory.
    ///
    /// The directory does not need to exist yet; it is created on the
    /// first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The data directory this backend reads and writes.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StoreError> {
        if key.is_empty()
            || !key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(StoreError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("invalid storage key: {key:?}"),
            )));
        }
        Ok(self.root.join(format!("{key}.json")))
    }
}

impl StorageBackend for FileBackend {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(s) => Ok(Some(s)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.root)?;

        // Write-then-rename keeps the visible file complete at all times.
        let tmp = self.root.join(format!(".{key}.json.tmp"));
        {
            let mut f = fs::File::create(&tmp)?;
            f.write_all(value.as_bytes())?;
            f.sync_all()?;
        }
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_absent_key() {
        let dir = TempDir::new().unwrap();
        let backend = FileBackend::new(dir.path());
        assert!(backend.load("documentosEmitidos").unwrap().is_none());
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let backend = FileBackend::new(dir.path());
        backend.save("documentosEmitidos", r#"{"A":1}"#).unwrap();
        assert_eq!(
            backend.load("documentosEmitidos").unwrap().as_deref(),
            Some(r#"{"A":1}"#)
        );
    }

    #[test]
    fn test_save_overwrites() {
        let dir = TempDir::new().unwrap();
        let backend = FileBackend::new(dir.path());
        backend.save("k", "first").unwrap();
        backend.save("k", "second").unwrap();
        assert_eq!(backend.load("k").unwrap().as_deref(), Some("second"));
    }

    #[test]
    fn test_remove_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let backend = FileBackend::new(dir.path());
        backend.save("k", "v").unwrap();
        backend.remove("k").unwrap();
        backend.remove("k").unwrap();
        assert!(backend.load("k").unwrap().is_none());
    }

    #[test]
    fn test_creates_root_on_first_write() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("dados").join("escola");
        let backend = FileBackend::new(&nested);
        backend.save("k", "v").unwrap();
        assert!(nested.join("k.json").is_file());
    }

    #[test]
    fn test_rejects_path_escaping_keys() {
        let dir = TempDir::new().unwrap();
        let backend = FileBackend::new(dir.path());
        assert!(backend.save("../escape", "v").is_err());
        assert!(backend.load("a/b").is_err());
        assert!(backend.remove("").is_err());
    }

    #[test]
    fn test_no_temp_file_left_behind() {
        let dir = TempDir::new().unwrap();
        let backend = FileBackend::new(dir.path());
        backend.save("k", "v").unwrap();
        let leftovers: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
            .collect();
        assert!(leftovers.is_empty());
    }
}
