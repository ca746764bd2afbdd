//! Persisted slot names
//!
//! Both slots live in the same key-value backend. There is no referential
//! integrity between them: the last picked minuteman may outlive its entry
//! in the list.

/// Key holding the encoded list of minutemen
pub const MINUTEMEN_LIST: &str = "minutemen list";

/// Key holding the encoded last picked minuteman (or an explicit `null`)
pub const LAST_MINUTEMAN: &str = "last minuteman";
