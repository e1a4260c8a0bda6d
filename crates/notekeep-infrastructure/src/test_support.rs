//! Shared test doubles for repository tests.

use async_trait::async_trait;
use notekeep_core::document::Document;
use serde_json::Value;

use crate::document_store::{DocumentStore, StoreError};

/// Store whose every call fails as if the backend were unreachable.
pub struct UnavailableStore;

impl UnavailableStore {
    fn error() -> StoreError {
        StoreError::Unavailable("offline".to_string())
    }
}

#[async_trait]
impl DocumentStore for UnavailableStore {
    async fn get(&self, _: &str, _: &str) -> Result<Option<Document>, StoreError> {
        Err(Self::error())
    }

    async fn query_eq(
        &self,
        _: &str,
        _: &str,
        _: &Value,
    ) -> Result<Vec<(String, Document)>, StoreError> {
        Err(Self::error())
    }

    async fn add(&self, _: &str, _: Document) -> Result<String, StoreError> {
        Err(Self::error())
    }

    async fn set(&self, _: &str, _: &str, _: Document) -> Result<(), StoreError> {
        Err(Self::error())
    }

    async fn update(&self, _: &str, _: &str, _: Document) -> Result<(), StoreError> {
        Err(Self::error())
    }
}
