//! In-memory session repository.

use crate::repository::SessionRepository;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// In-memory key-value store.
///
/// Cloning shares the underlying map, so a clone handed to the HTTP
/// pipeline and a clone held by a test observe the same state.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries (for test assertions).
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.lock().map_or(0, |e| e.len())
    }

    /// Whether the store holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SessionRepository for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .ok()
            .and_then(|e| e.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_string(), value.to_string());
        }
    }

    fn clear(&self, key: &str) -> bool {
        self.entries
            .lock()
            .ok()
            .and_then(|mut e| e.remove(key))
            .is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_clear() {
        let store = MemoryStore::new();
        assert!(store.get("token").is_none());

        store.set("token", "abc");
        assert_eq!(store.get("token").as_deref(), Some("abc"));

        assert!(store.clear("token"));
        assert!(!store.clear("token"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_clones_share_state() {
        let store = MemoryStore::new();
        let other = store.clone();

        store.set("user", "{}");
        assert_eq!(other.get("user").as_deref(), Some("{}"));
    }
}
