//! Profile repository trait.

use async_trait::async_trait;

use super::model::Profile;
use crate::error::Result;

/// Repository for managing profile persistence.
///
/// Profiles are stored under their owner's user id, so `save` is always an
/// upsert.
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Validates and stores the profile, replacing any previous one for the same user.
    async fn save(&self, profile: &Profile) -> Result<()>;

    /// Returns the user's profile, or `None` when none has been saved.
    async fn find_by_user_id(&self, user_id: &str) -> Result<Option<Profile>>;

    /// Whether a profile exists for `user_id`.
    ///
    /// Never fails: any lookup error is reported as `false`.
    async fn exists(&self, user_id: &str) -> bool;

    /// Refreshes `updated_at` and saves. Returns the stored profile.
    async fn update(&self, profile: Profile) -> Result<Profile>;
}
