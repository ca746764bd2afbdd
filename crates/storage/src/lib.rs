//! Storage layer for Minutemizer
//!
//! This crate implements the key-value backends the store delegates to:
//! - Backend: get/set/remove plus per-key change notification
//! - Watchers: callback registry shared by every backend
//! - MemoryBackend: isolated in-memory map, nothing touches disk
//! - FileBackend: named suite persisted to a single JSON file

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod backend;
pub mod error;
pub mod file;
pub mod memory;

pub use backend::{Backend, WatchCallback, WatchId, Watchers};
pub use error::{Result, StorageError};
pub use file::FileBackend;
pub use memory::MemoryBackend;
