//! File-backed session repository.

use crate::error::{Result, StoreError};
use crate::repository::SessionRepository;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Durable key-value store backed by a single JSON file.
///
/// All reads come from an in-memory cache; every mutation is written
/// through to disk. A failed write is logged and the cache keeps the new
/// value, so the process keeps a consistent view even on a read-only
/// filesystem.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl FileStore {
    /// Open (or create) the store at `path`.
    ///
    /// A missing file starts the store empty. A file that exists but does
    /// not parse is treated as corrupted: the store starts empty and the
    /// next write replaces the file.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the file exists but cannot be read.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        let entries = if path.exists() {
            let raw = std::fs::read_to_string(&path)?;
            match serde_json::from_str::<HashMap<String, String>>(&raw) {
                Ok(map) => map,
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "session file is corrupted, starting empty");
                    HashMap::new()
                }
            }
        } else {
            HashMap::new()
        };

        Ok(Self {
            path,
            entries: Arc::new(Mutex::new(entries)),
        })
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self, entries: &HashMap<String, String>) {
        let write = serde_json::to_string_pretty(entries)
            .map_err(StoreError::from)
            .and_then(|json| std::fs::write(&self.path, json).map_err(StoreError::from));

        if let Err(err) = write {
            tracing::warn!(path = %self.path.display(), error = %err, "failed to persist session store");
        }
    }
}

impl SessionRepository for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .ok()
            .and_then(|e| e.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_string(), value.to_string());
            self.flush(&entries);
        }
    }

    fn clear(&self, key: &str) -> bool {
        let Ok(mut entries) = self.entries.lock() else {
            return false;
        };

        let removed = entries.remove(key).is_some();
        if removed {
            self.flush(&entries);
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_round_trip_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        {
            let store = FileStore::open(&path).unwrap();
            store.set("token", "abc");
            store.set("user", r#"{"id":1}"#);
        }

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get("token").as_deref(), Some("abc"));
        assert_eq!(reopened.get("user").as_deref(), Some(r#"{"id":1}"#));
    }

    #[test]
    fn test_clear_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let store = FileStore::open(&path).unwrap();
        store.set("token", "abc");
        assert!(store.clear("token"));

        let reopened = FileStore::open(&path).unwrap();
        assert!(reopened.get("token").is_none());
    }

    #[test]
    fn test_corrupted_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "not json at all").unwrap();

        let store = FileStore::open(&path).unwrap();
        assert!(store.get("token").is_none());
    }

    #[test]
    fn test_missing_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path().join("absent.json")).unwrap();
        assert!(store.get("token").is_none());
        assert!(!store.clear("token"));
    }
}
