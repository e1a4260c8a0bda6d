//! DocumentStore-based NoteRepository implementation.

use async_trait::async_trait;
use notekeep_core::error::{NotekeepError, Result, StoreOperation};
use notekeep_core::note::{Note, NoteRepository};
use notekeep_core::timestamp::{now_iso, parse_iso};
use serde_json::Value;
use std::cmp::Reverse;
use std::fmt::Display;
use std::sync::Arc;

use crate::document_store::DocumentStore;

/// Note repository backed by a [`DocumentStore`].
///
/// Notes live in one collection keyed by a store-generated id; the owner is
/// the `userId` field of each document.
pub struct DocumentNoteRepository {
    store: Arc<dyn DocumentStore>,
    collection: String,
}

impl DocumentNoteRepository {
    pub const DEFAULT_COLLECTION: &'static str = "notes";

    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self::with_collection(store, Self::DEFAULT_COLLECTION)
    }

    pub fn with_collection(store: Arc<dyn DocumentStore>, collection: impl Into<String>) -> Self {
        Self {
            store,
            collection: collection.into(),
        }
    }

    fn wrap(operation: StoreOperation, err: impl Display) -> NotekeepError {
        tracing::error!("[NoteRepository] {}: {}", operation, err);
        NotekeepError::store(operation, err.to_string())
    }
}

#[async_trait]
impl NoteRepository for DocumentNoteRepository {
    async fn save(&self, note: &Note) -> Result<String> {
        note.validate()
            .map_err(|e| Self::wrap(StoreOperation::SaveNote, e))?;

        match note.id.as_deref() {
            Some(id) if !id.is_empty() => {
                // The stored creation time is kept; only the fields a caller edits are merged.
                let mut document = note.to_store_format();
                document.remove("createdAt");
                document.insert("updatedAt".to_string(), Value::String(now_iso()));
                self.store
                    .update(&self.collection, id, document)
                    .await
                    .map_err(|e| Self::wrap(StoreOperation::SaveNote, e))?;
                tracing::debug!("[NoteRepository] Updated note {}", id);
                Ok(id.to_string())
            }
            _ => {
                let id = self
                    .store
                    .add(&self.collection, note.to_store_format())
                    .await
                    .map_err(|e| Self::wrap(StoreOperation::SaveNote, e))?;
                tracing::debug!("[NoteRepository] Created note {}", id);
                Ok(id)
            }
        }
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Note>> {
        let document = self
            .store
            .get(&self.collection, id)
            .await
            .map_err(|e| Self::wrap(StoreOperation::FetchNote, e))?;
        Ok(document.map(|doc| Note::from_store(id, &doc)))
    }

    async fn find_by_user_id(&self, user_id: &str) -> Result<Vec<Note>> {
        let documents = self
            .store
            .query_eq(
                &self.collection,
                "userId",
                &Value::String(user_id.to_string()),
            )
            .await
            .map_err(|e| Self::wrap(StoreOperation::ListNotes, e))?;

        let mut notes: Vec<Note> = documents
            .iter()
            .map(|(id, doc)| Note::from_store(id.as_str(), doc))
            .collect();

        // Sorted here rather than in the query so the store needs no composite index.
        notes.sort_by_cached_key(|note| Reverse(parse_iso(&note.updated_at)));

        Ok(notes)
    }
}
