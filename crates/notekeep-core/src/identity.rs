//! Identity provider abstractions.
//!
//! Authentication itself is delegated to an external provider. The core only
//! needs to know who is signed in right now, to be told when that changes,
//! and to forward sign-in style requests.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::watch;

use crate::error::Result;

/// The authenticated subject as reported by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Provider subject id. Notes and profiles are owned by this value.
    pub uid: String,
    pub email: Option<String>,
}

impl Identity {
    pub fn new(uid: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            email: None,
        }
    }
}

/// Authentication state as observed through [`IdentityProvider::subscribe`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AuthState {
    /// The provider has not reported anything yet.
    #[default]
    Unresolved,
    SignedOut,
    SignedIn(Identity),
}

impl AuthState {
    pub fn identity(&self) -> Option<&Identity> {
        match self {
            AuthState::SignedIn(identity) => Some(identity),
            _ => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        !matches!(self, AuthState::Unresolved)
    }
}

/// Source of the current identity.
pub trait IdentityProvider: Send + Sync {
    /// The signed-in identity, if any. Never blocks.
    fn current_identity(&self) -> Option<Identity>;

    /// Receiver notified on every identity change.
    fn subscribe(&self) -> watch::Receiver<AuthState>;
}

/// Credential operations forwarded to the identity provider.
#[async_trait]
pub trait Authenticator: Send + Sync {
    async fn login(&self, email: &str, password: &str) -> Result<Identity>;

    async fn signup(&self, email: &str, password: &str) -> Result<Identity>;

    async fn reset_password(&self, email: &str) -> Result<()>;

    async fn logout(&self) -> Result<()>;
}
