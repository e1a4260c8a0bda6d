//! DocumentStore-based ProfileRepository implementation.

use async_trait::async_trait;
use notekeep_core::error::{NotekeepError, Result, StoreOperation};
use notekeep_core::profile::{Profile, ProfileRepository};
use std::fmt::Display;
use std::sync::Arc;

use crate::document_store::DocumentStore;

/// Profile repository backed by a [`DocumentStore`].
///
/// Each profile is stored at `{collection}/{userId}`, so `save` is a keyed
/// set-or-replace and there is no separate insert path.
pub struct DocumentProfileRepository {
    store: Arc<dyn DocumentStore>,
    collection: String,
}

impl DocumentProfileRepository {
    pub const DEFAULT_COLLECTION: &'static str = "profiles";

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
        tracing::error!("[ProfileRepository] {}: {}", operation, err);
        NotekeepError::store(operation, err.to_string())
    }
}

#[async_trait]
impl ProfileRepository for DocumentProfileRepository {
    async fn save(&self, profile: &Profile) -> Result<()> {
        profile
            .validate()
            .map_err(|e| Self::wrap(StoreOperation::SaveProfile, e))?;
        self.store
            .set(&self.collection, &profile.user_id, profile.to_store_format())
            .await
            .map_err(|e| Self::wrap(StoreOperation::SaveProfile, e))?;
        tracing::debug!("[ProfileRepository] Saved profile for {}", profile.user_id);
        Ok(())
    }

    async fn find_by_user_id(&self, user_id: &str) -> Result<Option<Profile>> {
        let document = self
            .store
            .get(&self.collection, user_id)
            .await
            .map_err(|e| Self::wrap(StoreOperation::FetchProfile, e))?;
        Ok(document.map(|doc| Profile::from_store(user_id, &doc)))
    }

    async fn exists(&self, user_id: &str) -> bool {
        match self.find_by_user_id(user_id).await {
            Ok(profile) => profile.is_some(),
            Err(e) => {
                tracing::warn!(
                    "[ProfileRepository] Existence check for {} failed, reporting false: {}",
                    user_id,
                    e
                );
                false
            }
        }
    }

    async fn update(&self, mut profile: Profile) -> Result<Profile> {
        profile.touch();
        self.save(&profile).await?;
        Ok(profile)
    }
}
