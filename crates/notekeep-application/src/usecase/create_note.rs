//! Create-or-update a note.

use notekeep_core::error::Result;
use notekeep_core::note::{Note, NoteParams, NoteRepository};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

/// Caller input for [`CreateNote`].
///
/// Passing an `id` saves over that existing note instead of inserting.
/// Timestamps are not accepted: creation time is set on insert and kept
/// by the repository on update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateNoteInput {
    pub id: Option<String>,
    pub user_id: Option<String>,
    pub title: Option<String>,
    pub content: Option<String>,
    pub tags: Option<Value>,
}

/// Builds, validates and saves a note, returning its id.
pub struct CreateNote {
    note_repository: Arc<dyn NoteRepository>,
}

impl CreateNote {
    pub fn new(note_repository: Arc<dyn NoteRepository>) -> Self {
        Self { note_repository }
    }

    /// The repository is never called when validation fails.
    pub async fn execute(&self, input: CreateNoteInput) -> Result<String> {
        let note = Note::new(NoteParams {
            id: input.id,
            user_id: input.user_id,
            title: input.title,
            content: input.content,
            tags: input.tags,
            ..Default::default()
        });

        note.validate()?;

        self.note_repository.save(&note).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecase::mocks::MockNoteRepository;
    use notekeep_core::error::{NotekeepError, ValidationError};
    use serde_json::json;

    fn input(user_id: &str, title: &str) -> CreateNoteInput {
        CreateNoteInput {
            user_id: Some(user_id.to_string()),
            title: Some(title.to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_creates_note_and_returns_id() {
        let repo = Arc::new(MockNoteRepository::default());
        let use_case = CreateNote::new(repo.clone());

        let id = use_case
            .execute(CreateNoteInput {
                content: Some("Body".to_string()),
                tags: Some(json!(["a", "b"])),
                ..input("user123", "Title")
            })
            .await
            .unwrap();

        assert_eq!(id, "note-1");
        let saved = repo.find_by_id_sync(&id);
        assert_eq!(saved.title, "Title");
        assert_eq!(saved.content, "Body");
        assert_eq!(saved.tags, vec!["a", "b"]);
    }

    #[tokio::test]
    async fn test_passes_id_through_for_update() {
        let repo = Arc::new(MockNoteRepository::default());
        let use_case = CreateNote::new(repo.clone());

        let id = use_case
            .execute(CreateNoteInput {
                id: Some("existing".to_string()),
                ..input("user123", "Title")
            })
            .await
            .unwrap();

        assert_eq!(id, "existing");
    }

    #[tokio::test]
    async fn test_invalid_input_never_reaches_repository() {
        let repo = Arc::new(MockNoteRepository::default());
        let use_case = CreateNote::new(repo.clone());

        let cases = [
            (input("", "Title"), ValidationError::UserIdRequired),
            (input("user123", ""), ValidationError::TitleRequired),
            (input("user123", &"x".repeat(101)), ValidationError::TitleTooLong),
            (
                CreateNoteInput {
                    tags: Some(json!("solo")),
                    ..input("user123", "Title")
                },
                ValidationError::TagsNotSequence,
            ),
        ];

        for (case, expected) in cases {
            let err = use_case.execute(case).await.unwrap_err();
            assert_eq!(err, NotekeepError::Validation(expected));
        }
        assert_eq!(repo.save_count(), 0);
    }
}
