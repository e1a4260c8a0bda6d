//! Profile view-model service.
//!
//! Binds the profile use cases to the signed-in identity and publishes
//! results into [`AppContext`]. Nothing here returns an error: failures are
//! reported through `context.profile_error` and a falsy return value.

use notekeep_core::error::NotekeepError;
use notekeep_core::identity::IdentityProvider;
use notekeep_core::profile::{Profile, ProfileInput, ProfileRepository};
use std::sync::Arc;

use crate::context::AppContext;
use crate::usecase::{CheckProfileExists, GetProfile, SaveProfile};

pub struct ProfileSession {
    identity: Arc<dyn IdentityProvider>,
    context: Arc<AppContext>,
    save_profile: SaveProfile,
    get_profile: GetProfile,
    check_profile_exists: CheckProfileExists,
}

impl ProfileSession {
    pub fn new(
        identity: Arc<dyn IdentityProvider>,
        profile_repository: Arc<dyn ProfileRepository>,
        context: Arc<AppContext>,
    ) -> Self {
        Self {
            identity,
            context,
            save_profile: SaveProfile::new(profile_repository.clone()),
            get_profile: GetProfile::new(profile_repository.clone()),
            check_profile_exists: CheckProfileExists::new(profile_repository),
        }
    }

    /// Whether the signed-in user has a profile. `false` when signed out.
    pub async fn check_profile(&self) -> bool {
        let Some(identity) = self.identity.current_identity() else {
            return false;
        };
        self.check_profile_exists.execute(Some(&identity.uid)).await
    }

    /// Saves the signed-in user's profile and publishes it on success.
    pub async fn save_profile(&self, input: ProfileInput) -> bool {
        let Some(identity) = self.identity.current_identity() else {
            self.context
                .profile_error
                .set(Some(NotekeepError::Unauthenticated.to_string()));
            return false;
        };

        self.context.profile_loading.set(true);
        self.context.profile_error.set(None);

        let saved = match self.save_profile.execute(&identity.uid, input).await {
            Ok(profile) => {
                self.context.profile.set(Some(profile));
                true
            }
            Err(e) => {
                tracing::error!("[ProfileSession] Error saving profile: {}", e);
                self.context.profile_error.set(Some(e.to_string()));
                false
            }
        };
        self.context.profile_loading.set(false);
        saved
    }

    /// Loads the signed-in user's profile into the context.
    ///
    /// `None` when signed out, when no profile exists, or on failure.
    pub async fn load_profile(&self) -> Option<Profile> {
        let identity = self.identity.current_identity()?;

        self.context.profile_loading.set(true);
        self.context.profile_error.set(None);

        let loaded = match self.get_profile.execute(Some(&identity.uid)).await {
            Ok(profile) => {
                self.context.profile.set(profile.clone());
                profile
            }
            Err(e) => {
                tracing::error!("[ProfileSession] Error loading profile: {}", e);
                self.context.profile_error.set(Some(e.to_string()));
                None
            }
        };
        self.context.profile_loading.set(false);
        loaded
    }
}
