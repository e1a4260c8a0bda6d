//! Note repository trait.
//!
//! Defines the interface for note persistence operations.

use async_trait::async_trait;

use super::model::Note;
use crate::error::Result;

/// An abstract repository for managing note persistence.
///
/// This trait decouples the note use cases from the concrete storage
/// technology (document store, test doubles, ...).
#[async_trait]
pub trait NoteRepository: Send + Sync {
    /// Saves a note and returns its identifier.
    ///
    /// # Returns
    ///
    /// - `Ok(id)`: the note's own id when it already had one (update), or the
    ///   store-generated id for a new note (insert)
    /// - `Err(_)`: validation or store failure
    async fn save(&self, note: &Note) -> Result<String>;

    /// Finds a note by its ID.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Note))`: Note found
    /// - `Ok(None)`: Note not found
    /// - `Err(_)`: Error occurred during retrieval
    async fn find_by_id(&self, id: &str) -> Result<Option<Note>>;

    /// Lists every note owned by `user_id`, most recently updated first.
    ///
    /// An owner without notes yields an empty list, not an error.
    async fn find_by_user_id(&self, user_id: &str) -> Result<Vec<Note>>;
}
