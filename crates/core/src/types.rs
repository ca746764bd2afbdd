//! Identifier types
//!
//! This module defines the identifier used throughout the system:
//! - [`MinutemanId`]: Unique identifier of a minuteman

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

/// Unique identifier for a minuteman
///
/// Generated once when a minuteman is created and carried verbatim through
/// every encode/decode cycle. Equality of minutemen is defined by this id
/// alone.
///
/// Serializes as a hyphenated UUID string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MinutemanId(Uuid);

impl MinutemanId {
    /// Create a new random MinutemanId using UUID v4
    ///
    /// # Examples
    ///
    /// ```
    /// use minutemizer_core::MinutemanId;
    ///
    /// let id1 = MinutemanId::new();
    /// let id2 = MinutemanId::new();
    /// assert_ne!(id1, id2);
    /// ```
    pub fn new() -> Self {
        MinutemanId(Uuid::new_v4())
    }

    /// Wrap an existing UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        MinutemanId(uuid)
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for MinutemanId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for MinutemanId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for MinutemanId {
    type Err = uuid::Error;

    /// Parse a UUID string
    ///
    /// # Examples
    ///
    /// ```
    /// use minutemizer_core::MinutemanId;
    ///
    /// let id: MinutemanId = "67e55044-10b1-426f-9247-bb680e5fe0c8".parse().unwrap();
    /// assert_eq!(id.to_string(), "67e55044-10b1-426f-9247-bb680e5fe0c8");
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(MinutemanId)
    }
}

impl From<Uuid> for MinutemanId {
    fn from(uuid: Uuid) -> Self {
        MinutemanId(uuid)
    }
}
