//! # Minutemizer
//!
//! A small, locally persisted roster of minutemen with random picking.
//!
//! Minutemizer keeps an ordered list of [`Minuteman`] records in a key-value
//! [`Backend`](minutemizer_storage::Backend), remembers the last one picked,
//! and lets callers observe the list as it changes.
//!
//! ## Quick Start
//!
//! ```
//! use minutemizer::prelude::*;
//!
//! let store = Minutemizer::ephemeral();
//!
//! // Keep the handle alive to keep receiving updates
//! let _watch = store.subscribe(|list| println!("{} minutemen", list.len()));
//!
//! store.add(Minuteman::new("Harry", "Potter", Some("James")))?;
//! store.add(Minuteman::new("Ron", "Weasley", None::<&str>))?;
//!
//! if let Some(picked) = store.pick_one()? {
//!     println!("Today: {}", picked);
//! }
//! # Ok::<(), minutemizer::Error>(())
//! ```
//!
//! ## Backends
//!
//! - [`MemoryBackend`]: isolated, nothing touches disk
//! - [`FileBackend`]: a named suite persisted to one JSON file
//! - anything else implementing [`Backend`]

#![warn(missing_docs)]

mod error;
mod store;
mod subscription;

pub mod prelude;

// Re-export main entry points
pub use error::{Error, Result};
pub use store::{Minutemizer, MinutemizerBuilder, DEFAULT_SUITE};
pub use subscription::Subscription;

// Re-export the entity model and storage layer
pub use minutemizer_core::{keys, Minuteman, MinutemanId};
pub use minutemizer_storage::{Backend, FileBackend, MemoryBackend, StorageError};
