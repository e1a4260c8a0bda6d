//! Save (create or update) the user's profile.

use notekeep_core::error::Result;
use notekeep_core::profile::{Profile, ProfileInput, ProfileParams, ProfileRepository};
use notekeep_core::timestamp::now_iso;
use std::sync::Arc;

/// Upserts a profile, keeping the original creation time on updates.
pub struct SaveProfile {
    profile_repository: Arc<dyn ProfileRepository>,
}

impl SaveProfile {
    pub fn new(profile_repository: Arc<dyn ProfileRepository>) -> Self {
        Self { profile_repository }
    }

    /// Returns the saved profile so callers see the stored timestamps.
    pub async fn execute(&self, user_id: &str, input: ProfileInput) -> Result<Profile> {
        let existing = self.profile_repository.find_by_user_id(user_id).await?;

        let now = now_iso();
        let created_at = match existing {
            Some(existing) => existing.created_at,
            None => now.clone(),
        };

        let profile = Profile::new(ProfileParams {
            user_id: Some(user_id.to_string()),
            name: Some(input.name),
            gender: Some(input.gender),
            created_at: Some(created_at),
            updated_at: Some(now),
        });

        profile.validate()?;

        self.profile_repository.save(&profile).await?;

        Ok(profile)
    }
}
