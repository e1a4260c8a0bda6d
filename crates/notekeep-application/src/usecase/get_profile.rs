//! Read the user's profile.

use notekeep_core::error::{NotekeepError, Result};
use notekeep_core::profile::{Profile, ProfileRepository};
use std::sync::Arc;

pub struct GetProfile {
    profile_repository: Arc<dyn ProfileRepository>,
}

impl GetProfile {
    pub fn new(profile_repository: Arc<dyn ProfileRepository>) -> Self {
        Self { profile_repository }
    }

    /// `Ok(None)` when the user has no profile; only a missing id is an error.
    pub async fn execute(&self, user_id: Option<&str>) -> Result<Option<Profile>> {
        match user_id {
            Some(user_id) if !user_id.is_empty() => {
                self.profile_repository.find_by_user_id(user_id).await
            }
            _ => Err(NotekeepError::UserIdNotSpecified),
        }
    }
}
