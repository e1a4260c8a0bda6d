//! Document store driver interface.
//!
//! Documents are addressed by `{collection}/{id}`. Drivers only move JSON
//! objects around; entity conversion and error wrapping live in the
//! repositories.

mod json_dir;
mod memory;

pub use json_dir::JsonDirDocumentStore;
pub use memory::InMemoryDocumentStore;

use async_trait::async_trait;
use notekeep_core::document::Document;
use serde_json::Value;
use thiserror::Error;

/// Failures reported by a document store driver.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// `update` targeted a document that does not exist
    #[error("No document to update: {collection}/{id}")]
    NotFound { collection: String, id: String },

    /// Collection or document id cannot be used as a key
    #[error("Invalid document key: {0}")]
    InvalidKey(String),

    #[error("Storage I/O failed: {0}")]
    Io(String),

    #[error("Stored document is malformed: {0}")]
    Malformed(String),

    /// The backend could not be reached
    #[error("Document store unavailable: {0}")]
    Unavailable(String),
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::Malformed(err.to_string())
    }
}

/// Primitive operations of a remote document store.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Reads one document. A missing document is `Ok(None)`.
    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>, StoreError>;

    /// Returns `(id, document)` for every document whose `field` equals `value`.
    /// Result order is unspecified.
    async fn query_eq(
        &self,
        collection: &str,
        field: &str,
        value: &Value,
    ) -> Result<Vec<(String, Document)>, StoreError>;

    /// Inserts a document under a store-generated id and returns that id.
    async fn add(&self, collection: &str, document: Document) -> Result<String, StoreError>;

    /// Creates or fully replaces the document at `id`.
    async fn set(&self, collection: &str, id: &str, document: Document) -> Result<(), StoreError>;

    /// Merges `fields` into an existing document.
    ///
    /// Fails with [`StoreError::NotFound`] when the document does not exist.
    async fn update(&self, collection: &str, id: &str, fields: Document)
    -> Result<(), StoreError>;
}

/// Generates an id for `add`.
pub(crate) fn generate_document_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}
