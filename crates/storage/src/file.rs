//! File-backed suite
//!
//! A suite is a named key-value domain persisted to `<dir>/<suite>.json`:
//!
//! ```json
//! {
//!   "last minuteman": "bnVsbA==",
//!   "minutemen list": "W10="
//! }
//! ```
//!
//! Values are raw bytes, stored base64-encoded. The whole map is rewritten
//! on every mutation through a sibling `.tmp` file and a rename, so a crash
//! leaves either the old or the new file, never a torn one.

use crate::backend::{Backend, WatchCallback, WatchId, Watchers};
use crate::error::{Result, StorageError};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Key-value backend persisted to a single JSON file
pub struct FileBackend {
    path: PathBuf,
    data: RwLock<BTreeMap<String, Vec<u8>>>,
    watchers: Watchers,
}

impl FileBackend {
    /// Open (or create) the suite `suite` inside `dir`
    ///
    /// The directory is created if needed. An existing suite file is loaded;
    /// a leftover temp file from an interrupted write is discarded.
    ///
    /// # Errors
    ///
    /// - [`StorageError::InvalidSuite`] for an empty name or one containing
    ///   a path separator
    /// - [`StorageError::Corrupt`] if the suite file cannot be parsed
    pub fn open(dir: impl AsRef<Path>, suite: &str) -> Result<Self> {
        if suite.is_empty() || suite.contains(['/', '\\']) || suite == "." || suite == ".." {
            return Err(StorageError::InvalidSuite(suite.to_string()));
        }

        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;
        let path = dir.join(format!("{suite}.json"));

        let tmp = tmp_path(&path);
        if tmp.exists() {
            warn!("Discarding stale temp file {}", tmp.display());
            fs::remove_file(&tmp)?;
        }

        let data = if path.exists() {
            load(&path)?
        } else {
            BTreeMap::new()
        };
        info!("Opened suite {} with {} keys", path.display(), data.len());

        Ok(Self {
            path,
            data: RwLock::new(data),
            watchers: Watchers::new(),
        })
    }

    /// Path of the suite file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Delete the suite file and forget every key
    ///
    /// Watchers of each dropped key are notified with `None`.
    pub fn remove_persistent_domain(&self) -> Result<()> {
        let dropped: Vec<String> = {
            let mut data = self.data.write();
            if self.path.exists() {
                fs::remove_file(&self.path)?;
            }
            let keys = data.keys().cloned().collect();
            data.clear();
            keys
        };
        info!("Removed suite {}", self.path.display());

        for key in &dropped {
            self.watchers.notify(key, None);
        }
        Ok(())
    }

    fn persist(&self, data: &BTreeMap<String, Vec<u8>>) -> Result<()> {
        let encoded: BTreeMap<&str, String> = data
            .iter()
            .map(|(key, value)| (key.as_str(), STANDARD.encode(value)))
            .collect();
        let bytes = serde_json::to_vec_pretty(&encoded)
            .map_err(|e| StorageError::Corrupt(e.to_string()))?;

        let tmp = tmp_path(&self.path);
        fs::write(&tmp, bytes)?;
        fs::rename(&tmp, &self.path)?;
        debug!("Persisted {} keys to {}", data.len(), self.path.display());
        Ok(())
    }
}

impl Backend for FileBackend {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.data.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: Vec<u8>) -> Result<()> {
        {
            let mut data = self.data.write();
            let previous = data.insert(key.to_string(), value.clone());
            if let Err(e) = self.persist(&data) {
                match previous {
                    Some(previous) => data.insert(key.to_string(), previous),
                    None => data.remove(key),
                };
                return Err(e);
            }
        }
        self.watchers.notify(key, Some(&value));
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        {
            let mut data = self.data.write();
            let Some(previous) = data.remove(key) else {
                return Ok(());
            };
            if let Err(e) = self.persist(&data) {
                data.insert(key.to_string(), previous);
                return Err(e);
            }
        }
        self.watchers.notify(key, None);
        Ok(())
    }

    fn watch(&self, key: &str, callback: WatchCallback) -> WatchId {
        self.watchers.add(key, callback)
    }

    fn unwatch(&self, id: WatchId) -> bool {
        self.watchers.remove(id)
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    PathBuf::from(tmp)
}

fn load(path: &Path) -> Result<BTreeMap<String, Vec<u8>>> {
    let raw = fs::read(path)?;
    let encoded: BTreeMap<String, String> = serde_json::from_slice(&raw)
        .map_err(|e| StorageError::Corrupt(format!("{}: {}", path.display(), e)))?;

    encoded
        .into_iter()
        .map(|(key, value)| {
            STANDARD
                .decode(value)
                .map(|bytes| (key.clone(), bytes))
                .map_err(|e| StorageError::Corrupt(format!("value of {:?}: {}", key, e)))
        })
        .collect()
}
