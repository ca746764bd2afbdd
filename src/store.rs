//! Main entry point for Minutemizer.
//!
//! This module provides the [`Minutemizer`] store and its builder. The store
//! is a stateless façade over a key-value [`Backend`]: every operation reads
//! the slots it needs, decodes them, and writes the result back. Nothing is
//! cached between calls.
//!
//! # Persisted slots
//!
//! | Key | Content |
//! |-----|---------|
//! | `"minutemen list"` | JSON array of minutemen |
//! | `"last minuteman"` | JSON minuteman, or `null` after an empty pick |

use crate::error::{Error, Result};
use crate::subscription::Subscription;
use minutemizer_core::{keys, Minuteman};
use minutemizer_storage::{Backend, FileBackend, MemoryBackend};
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

/// Suite name used when none is configured
pub const DEFAULT_SUITE: &str = "minutemizer";

/// The minutemen store.
///
/// Create one with [`Minutemizer::ephemeral`], [`Minutemizer::open`] or
/// [`Minutemizer::builder`].
///
/// # Example
///
/// ```
/// use minutemizer::prelude::*;
///
/// let store = Minutemizer::ephemeral();
/// let harry = Minuteman::new("Harry", "Potter", Some("James"));
/// store.add(harry.clone())?;
///
/// assert_eq!(store.pick_one()?, Some(harry.clone()));
/// assert_eq!(store.last_picked()?, Some(harry));
/// # Ok::<(), minutemizer::Error>(())
/// ```
///
/// # Concurrency
///
/// Operations are synchronous read-modify-write sequences with no locking
/// across them. Two handles writing the same backend concurrently are
/// last-write-wins.
pub struct Minutemizer {
    backend: Arc<dyn Backend>,
    rng: Mutex<StdRng>,
}

impl Minutemizer {
    /// Create a store over a fresh in-memory backend.
    pub fn ephemeral() -> Self {
        Self::with_backend(Arc::new(MemoryBackend::new()))
    }

    /// Open the default suite in `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::builder().path(path).open()
    }

    /// Create a store over an existing backend.
    ///
    /// Several stores may share one backend; subscribers of each see the
    /// writes of all.
    pub fn with_backend(backend: Arc<dyn Backend>) -> Self {
        Self {
            backend,
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Create a builder for store configuration.
    pub fn builder() -> MinutemizerBuilder {
        MinutemizerBuilder::new()
    }

    /// The backend this store writes to.
    pub fn backend(&self) -> &Arc<dyn Backend> {
        &self.backend
    }

    // =========================================================================
    // Reading
    // =========================================================================

    /// Current list of minutemen.
    ///
    /// An absent list reads as empty.
    pub fn current_list(&self) -> Result<Vec<Minuteman>> {
        match self.backend.get(keys::MINUTEMEN_LIST)? {
            Some(bytes) => decode_list(&bytes),
            None => Ok(Vec::new()),
        }
    }

    /// Last picked minuteman, if any.
    ///
    /// Returns `None` when nothing was ever picked and after a pick from an
    /// empty list.
    pub fn last_picked(&self) -> Result<Option<Minuteman>> {
        match self.backend.get(keys::LAST_MINUTEMAN)? {
            Some(bytes) => decode_last(&bytes),
            None => Ok(None),
        }
    }

    // =========================================================================
    // Picking
    // =========================================================================

    /// Pick a minuteman uniformly at random and remember it as last picked.
    ///
    /// Every element of the list is equally likely, so a minuteman stored
    /// twice is twice as likely to come up. On an empty list this returns
    /// `None` and overwrites the last picked slot with an explicit `null`.
    pub fn pick_one(&self) -> Result<Option<Minuteman>> {
        let list = self.current_list()?;
        let picked = list.choose(&mut *self.rng.lock()).cloned();

        let encoded = serde_json::to_vec(&picked).map_err(Error::encode)?;
        self.backend.set(keys::LAST_MINUTEMAN, encoded)?;

        match &picked {
            Some(m) => debug!(id = %m.id(), candidates = list.len(), "picked minuteman"),
            None => debug!("pick from empty list"),
        }
        Ok(picked)
    }

    // =========================================================================
    // Mutating the list
    // =========================================================================

    /// Append a minuteman to the list.
    pub fn add(&self, minuteman: Minuteman) -> Result<()> {
        self.add_many([minuteman])
    }

    /// Append minutemen to the list, in order.
    ///
    /// No deduplication happens: adding the same minuteman twice stores it
    /// twice.
    pub fn add_many(&self, minutemen: impl IntoIterator<Item = Minuteman>) -> Result<()> {
        let mut list = self.current_list()?;
        let before = list.len();
        list.extend(minutemen);

        self.store_list(&list)?;
        debug!(added = list.len() - before, total = list.len(), "added minutemen");
        Ok(())
    }

    /// Remove a minuteman (and every copy sharing its id) from the list.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyList`] if the stored list is absent or empty.
    pub fn delete(&self, minuteman: &Minuteman) -> Result<()> {
        self.delete_many([minuteman])
    }

    /// Remove every stored minuteman equal to any of `minutemen`.
    ///
    /// The emptiness check looks at the stored list before filtering, so
    /// deleting the last remaining minutemen succeeds and leaves an empty
    /// list behind. Requests matching nothing are ignored.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyList`] if the stored list is absent or empty.
    pub fn delete_many<'a>(
        &self,
        minutemen: impl IntoIterator<Item = &'a Minuteman>,
    ) -> Result<()> {
        let mut list = self.current_list()?;
        if list.is_empty() {
            return Err(Error::EmptyList);
        }

        let before = list.len();
        for minuteman in minutemen {
            list.retain(|stored| stored != minuteman);
        }

        self.store_list(&list)?;
        debug!(removed = before - list.len(), total = list.len(), "deleted minutemen");
        Ok(())
    }

    /// Forget the list and the last picked minuteman.
    pub fn delete_all(&self) -> Result<()> {
        self.backend.remove(keys::MINUTEMEN_LIST)?;
        self.backend.remove(keys::LAST_MINUTEMAN)?;
        debug!("deleted all minutemen");
        Ok(())
    }

    // =========================================================================
    // Observing
    // =========================================================================

    /// Observe the list.
    ///
    /// `listener` is called right away with the current list, then with the
    /// full decoded list after every write to it (an empty slice once the
    /// list is removed). Updates that fail to decode are skipped; the
    /// subscription stays alive.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&[Minuteman]) + Send + Sync + 'static,
    {
        let listener = Arc::new(listener);
        let on_change = Arc::clone(&listener);
        let id = self.backend.watch(
            keys::MINUTEMEN_LIST,
            Box::new(move |value: Option<&[u8]>| {
                match value.map_or_else(|| Ok(Vec::new()), decode_list) {
                    Ok(list) => on_change(list.as_slice()),
                    Err(e) => debug!(error = %e, "skipping undecodable list update"),
                }
            }),
        );

        match self.current_list() {
            Ok(list) => listener(list.as_slice()),
            Err(e) => debug!(error = %e, "skipping undecodable initial list"),
        }
        Subscription::new(Arc::clone(&self.backend), id)
    }

    /// Observe the last picked minuteman.
    ///
    /// Same delivery rules as [`Minutemizer::subscribe`].
    pub fn subscribe_last_picked<F>(&self, listener: F) -> Subscription
    where
        F: Fn(Option<&Minuteman>) + Send + Sync + 'static,
    {
        let listener = Arc::new(listener);
        let on_change = Arc::clone(&listener);
        let id = self.backend.watch(
            keys::LAST_MINUTEMAN,
            Box::new(move |value: Option<&[u8]>| {
                match value.map_or(Ok(None), decode_last) {
                    Ok(last) => on_change(last.as_ref()),
                    Err(e) => debug!(error = %e, "skipping undecodable last picked update"),
                }
            }),
        );

        match self.last_picked() {
            Ok(last) => listener(last.as_ref()),
            Err(e) => debug!(error = %e, "skipping undecodable initial last picked"),
        }
        Subscription::new(Arc::clone(&self.backend), id)
    }

    fn store_list(&self, list: &[Minuteman]) -> Result<()> {
        let encoded = serde_json::to_vec(list).map_err(Error::encode)?;
        self.backend.set(keys::MINUTEMEN_LIST, encoded)?;
        Ok(())
    }
}

fn decode_list(bytes: &[u8]) -> Result<Vec<Minuteman>> {
    if bytes.is_empty() {
        return Ok(Vec::new());
    }
    let list: Option<Vec<Minuteman>> = serde_json::from_slice(bytes).map_err(Error::decode)?;
    Ok(list.unwrap_or_default())
}

fn decode_last(bytes: &[u8]) -> Result<Option<Minuteman>> {
    if bytes.is_empty() {
        return Ok(None);
    }
    serde_json::from_slice(bytes).map_err(Error::decode)
}

/// Builder for store configuration.
///
/// # Example
///
/// ```no_run
/// use minutemizer::Minutemizer;
///
/// // Persistent suite on disk
/// let store = Minutemizer::builder()
///     .path("./data")
///     .suite("roster")
///     .open()?;
///
/// // Deterministic picks over an in-memory backend
/// let store = Minutemizer::builder().seed(7).open()?;
/// # Ok::<(), minutemizer::Error>(())
/// ```
pub struct MinutemizerBuilder {
    backend: Option<Arc<dyn Backend>>,
    path: Option<PathBuf>,
    suite: String,
    seed: Option<u64>,
}

impl MinutemizerBuilder {
    /// Create a builder with default settings.
    ///
    /// With nothing configured, [`MinutemizerBuilder::open`] uses an
    /// in-memory backend.
    pub fn new() -> Self {
        Self {
            backend: None,
            path: None,
            suite: DEFAULT_SUITE.to_string(),
            seed: None,
        }
    }

    /// Use an existing backend. Takes precedence over [`path`](Self::path).
    pub fn backend(mut self, backend: Arc<dyn Backend>) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Persist to a file suite in this directory.
    pub fn path(mut self, path: impl AsRef<Path>) -> Self {
        self.path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Name of the file suite (default `"minutemizer"`).
    pub fn suite(mut self, suite: impl Into<String>) -> Self {
        self.suite = suite.into();
        self
    }

    /// Seed the picker for reproducible picks.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build the store, opening the file suite if one is configured.
    pub fn open(self) -> Result<Minutemizer> {
        let backend: Arc<dyn Backend> = match (self.backend, self.path) {
            (Some(backend), _) => backend,
            (None, Some(path)) => Arc::new(FileBackend::open(path, &self.suite)?),
            (None, None) => Arc::new(MemoryBackend::new()),
        };

        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(Minutemizer {
            backend,
            rng: Mutex::new(rng),
        })
    }
}

impl Default for MinutemizerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
