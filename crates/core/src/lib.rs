//! Core types for Minutemizer
//!
//! This crate defines the entity model shared by the storage layer and the
//! store façade:
//! - [`MinutemanId`]: Opaque unique identifier of a minuteman
//! - [`Minuteman`]: A named person, equal to another only by id
//! - [`keys`]: Names of the persisted slots

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod keys;
pub mod minuteman;
pub mod types;

pub use minuteman::Minuteman;
pub use types::MinutemanId;
