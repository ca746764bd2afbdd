//! Backend contract and change notification
//!
//! A backend is a flat map from string keys to raw bytes. Anything that can
//! answer `get`, `set` and `remove`, and can tell interested parties when a
//! key changes, can sit under the store.
//!
//! # Notification order
//!
//! Watchers of a key are called after every successful `set` of that key,
//! and after a `remove` that actually dropped a value, in the order they
//! were registered. Callbacks run on the writer's thread once the backend
//! has released its own locks, so a callback is free to read the backend.

use crate::error::Result;
use parking_lot::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Callback invoked with the new raw value of a watched key
///
/// `None` means the key was removed.
pub type WatchCallback = Box<dyn Fn(Option<&[u8]>) + Send + Sync>;

/// Handle identifying one registered watch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WatchId(u64);

impl WatchId {
    /// Raw numeric value
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

/// Key-value persistence the store delegates to
///
/// Implementations must be safe to share between threads. No transaction
/// is offered: concurrent read-modify-write sequences are last-write-wins.
pub trait Backend: Send + Sync {
    /// Read the raw value stored under `key`
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: Vec<u8>) -> Result<()>;

    /// Drop the value under `key`; a missing key is not an error
    fn remove(&self, key: &str) -> Result<()>;

    /// Register a callback fired whenever `key` changes
    fn watch(&self, key: &str, callback: WatchCallback) -> WatchId;

    /// Cancel a watch
    ///
    /// Returns `true` if the watch was still registered.
    fn unwatch(&self, id: WatchId) -> bool;
}

struct Entry {
    id: WatchId,
    key: String,
    callback: Arc<dyn Fn(Option<&[u8]>) + Send + Sync>,
}

/// Registry of watch callbacks, keyed by backend key
///
/// Backends embed one of these and call [`Watchers::notify`] after each
/// successful mutation.
pub struct Watchers {
    next_id: AtomicU64,
    entries: RwLock<Vec<Entry>>,
}

impl Watchers {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            next_id: AtomicU64::new(1),
            entries: RwLock::new(Vec::new()),
        }
    }

    /// Register a callback for `key`
    pub fn add(&self, key: &str, callback: WatchCallback) -> WatchId {
        let id = WatchId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.entries.write().push(Entry {
            id,
            key: key.to_string(),
            callback: Arc::from(callback),
        });
        id
    }

    /// Remove a callback; returns `true` if it was registered
    pub fn remove(&self, id: WatchId) -> bool {
        let mut entries = self.entries.write();
        let before = entries.len();
        entries.retain(|entry| entry.id != id);
        entries.len() != before
    }

    /// Number of callbacks currently registered
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Check if no callback is registered
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Deliver a change of `key` to its watchers, in registration order
    ///
    /// The registry lock is not held while callbacks run, so a callback may
    /// add or remove watches.
    pub fn notify(&self, key: &str, value: Option<&[u8]>) {
        let callbacks: Vec<_> = self
            .entries
            .read()
            .iter()
            .filter(|entry| entry.key == key)
            .map(|entry| Arc::clone(&entry.callback))
            .collect();

        for callback in callbacks {
            callback(value);
        }
    }
}

impl Default for Watchers {
    fn default() -> Self {
        Self::new()
    }
}
