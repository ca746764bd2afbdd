//! The minuteman entity
//!
//! A minuteman is a named person kept in the roster. Two minutemen are the
//! same minuteman when they share an id, whatever their names say; two
//! namesakes with different ids are distinct.

use crate::types::MinutemanId;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// A person stored in the roster
///
/// # JSON shape
///
/// ```json
/// {"id": "<uuid>", "firstName": "Harry", "secondName": "Potter", "middleName": "James"}
/// ```
///
/// `middleName` is omitted when absent, so an absent middle name never
/// collapses into an empty one.
///
/// # Examples
///
/// ```
/// use minutemizer_core::Minuteman;
///
/// let harry = Minuteman::new("Harry", "Potter", Some("James"));
/// let namesake = Minuteman::new("Harry", "Potter", Some("James"));
/// assert_ne!(harry, namesake);
/// assert_eq!(harry, harry.clone());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Minuteman {
    id: MinutemanId,
    first_name: String,
    second_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    middle_name: Option<String>,
}

impl Minuteman {
    /// Create a minuteman with a freshly generated id
    pub fn new(
        first_name: impl Into<String>,
        second_name: impl Into<String>,
        middle_name: Option<impl Into<String>>,
    ) -> Self {
        Self::with_id(MinutemanId::new(), first_name, second_name, middle_name)
    }

    /// Rebuild a minuteman whose id is already known
    ///
    /// The id is taken verbatim; nothing is regenerated.
    pub fn with_id(
        id: MinutemanId,
        first_name: impl Into<String>,
        second_name: impl Into<String>,
        middle_name: Option<impl Into<String>>,
    ) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            second_name: second_name.into(),
            middle_name: middle_name.map(Into::into),
        }
    }

    /// Unique identifier
    pub fn id(&self) -> MinutemanId {
        self.id
    }

    /// First name
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Second name, family name, surname
    pub fn second_name(&self) -> &str {
        &self.second_name
    }

    /// Middle name, if one exists
    pub fn middle_name(&self) -> Option<&str> {
        self.middle_name.as_deref()
    }

    /// Names joined in reading order: first, middle (if any), second
    pub fn full_name(&self) -> String {
        match &self.middle_name {
            Some(middle) => format!("{} {} {}", self.first_name, middle, self.second_name),
            None => format!("{} {}", self.first_name, self.second_name),
        }
    }

    /// Reassign the identifier
    ///
    /// Only for decode-then-assign workflows where the id must match a
    /// value held elsewhere. Changing the id changes the identity.
    pub fn set_id(&mut self, id: MinutemanId) {
        self.id = id;
    }
}

impl PartialEq for Minuteman {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Minuteman {}

// Must agree with PartialEq: id only.
impl Hash for Minuteman {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl std::fmt::Display for Minuteman {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.full_name())
    }
}
