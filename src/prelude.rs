//! Convenient imports for Minutemizer.
//!
//! ```
//! use minutemizer::prelude::*;
//!
//! let store = Minutemizer::ephemeral();
//! assert!(store.current_list()?.is_empty());
//! # Ok::<(), minutemizer::Error>(())
//! ```

// Main entry point
pub use crate::store::{Minutemizer, MinutemizerBuilder};
pub use crate::subscription::Subscription;

// Error handling
pub use crate::error::{Error, Result};

// Entity model
pub use minutemizer_core::{Minuteman, MinutemanId};

// Backends
pub use minutemizer_storage::{Backend, FileBackend, MemoryBackend};
