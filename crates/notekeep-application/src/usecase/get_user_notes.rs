//! List a user's notes.

use notekeep_core::error::{Result, ValidationError};
use notekeep_core::note::{Note, NoteRepository};
use std::sync::Arc;

pub struct GetUserNotes {
    note_repository: Arc<dyn NoteRepository>,
}

impl GetUserNotes {
    pub fn new(note_repository: Arc<dyn NoteRepository>) -> Self {
        Self { note_repository }
    }

    /// Returns the repository's list unchanged. A missing or empty user id is
    /// an error; a user with no notes gets an empty list.
    pub async fn execute(&self, user_id: Option<&str>) -> Result<Vec<Note>> {
        match user_id {
            Some(user_id) if !user_id.is_empty() => {
                self.note_repository.find_by_user_id(user_id).await
            }
            _ => Err(ValidationError::UserIdRequired.into()),
        }
    }
}
