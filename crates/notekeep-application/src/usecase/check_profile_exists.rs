//! Profile existence check used by the navigation guard.

use notekeep_core::profile::ProfileRepository;
use std::sync::Arc;

/// Answers "does this user have a profile?" without ever failing.
pub struct CheckProfileExists {
    profile_repository: Arc<dyn ProfileRepository>,
}

impl CheckProfileExists {
    pub fn new(profile_repository: Arc<dyn ProfileRepository>) -> Self {
        Self { profile_repository }
    }

    /// `false` for a missing or empty id, without touching the repository.
    pub async fn execute(&self, user_id: Option<&str>) -> bool {
        match user_id {
            Some(user_id) if !user_id.is_empty() => self.profile_repository.exists(user_id).await,
            _ => false,
        }
    }
}
