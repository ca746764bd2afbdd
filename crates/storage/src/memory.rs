//! In-memory backend
//!
//! Nothing touches disk and every instance is isolated, which makes it the
//! backend of choice for tests and throwaway stores.

use crate::backend::{Backend, WatchCallback, WatchId, Watchers};
use crate::error::Result;
use parking_lot::RwLock;
use rustc_hash::FxHashMap;

/// Ephemeral key-value backend
///
/// # Example
///
/// ```
/// use minutemizer_storage::{Backend, MemoryBackend};
///
/// let backend = MemoryBackend::new();
/// backend.set("key", b"value".to_vec()).unwrap();
/// assert_eq!(backend.get("key").unwrap(), Some(b"value".to_vec()));
/// ```
pub struct MemoryBackend {
    data: RwLock<FxHashMap<String, Vec<u8>>>,
    watchers: Watchers,
}

impl MemoryBackend {
    /// Create an empty backend
    pub fn new() -> Self {
        Self {
            data: RwLock::new(FxHashMap::default()),
            watchers: Watchers::new(),
        }
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.data.read().len()
    }

    /// Check if nothing is stored
    pub fn is_empty(&self) -> bool {
        self.data.read().is_empty()
    }
}

impl Default for MemoryBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl Backend for MemoryBackend {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.data.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: Vec<u8>) -> Result<()> {
        self.data.write().insert(key.to_string(), value.clone());
        self.watchers.notify(key, Some(&value));
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let removed = self.data.write().remove(key);
        if removed.is_some() {
            self.watchers.notify(key, None);
        }
        Ok(())
    }

    fn watch(&self, key: &str, callback: WatchCallback) -> WatchId {
        self.watchers.add(key, callback)
    }

    fn unwatch(&self, id: WatchId) -> bool {
        self.watchers.remove(id)
    }
}
