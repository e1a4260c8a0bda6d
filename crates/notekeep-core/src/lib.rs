//! Domain layer for Notekeep.
//!
//! Entities with their invariants, repository traits, identity abstractions,
//! navigation value types and the configuration model. Nothing in this crate
//! performs I/O.

pub mod config;
pub mod document;
pub mod error;
pub mod identity;
pub mod navigation;
pub mod note;
pub mod profile;
pub mod timestamp;

// Re-export common error type
pub use error::{NotekeepError, Result, StoreOperation, ValidationError};
