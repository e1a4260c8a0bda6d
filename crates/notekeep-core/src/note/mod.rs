//! Note domain module.
//!
//! # Module Structure
//!
//! - `model`: the `Note` entity and its field bag
//! - `repository`: Note repository trait for persistence

mod model;
pub mod repository;

pub use model::{NOTE_TITLE_MAX_CHARS, Note, NoteParams};
pub use repository::NoteRepository;
