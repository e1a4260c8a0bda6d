//! In-process identity provider.
//!
//! Stands in for the external identity service in tests and in the CLI:
//! it keeps an account table and publishes every identity change on a
//! `watch` channel.

use async_trait::async_trait;
use notekeep_core::error::{NotekeepError, Result};
use notekeep_core::identity::{AuthState, Authenticator, Identity, IdentityProvider};
use std::collections::HashMap;
use tokio::sync::{Mutex, watch};

const MIN_PASSWORD_CHARS: usize = 6;

struct Account {
    uid: String,
    password: String,
}

/// Identity provider holding accounts in memory.
///
/// Starts in [`AuthState::Unresolved`]; call [`resolve_signed_out`](Self::resolve_signed_out)
/// or sign someone in to emit the first auth-state event.
pub struct InMemoryIdentityProvider {
    state: watch::Sender<AuthState>,
    accounts: Mutex<HashMap<String, Account>>,
}

impl Default for InMemoryIdentityProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryIdentityProvider {
    pub fn new() -> Self {
        let (state, _) = watch::channel(AuthState::Unresolved);
        Self {
            state,
            accounts: Mutex::new(HashMap::new()),
        }
    }

    /// Reports "nobody signed in" as the resolved state.
    pub fn resolve_signed_out(&self) {
        self.state.send_replace(AuthState::SignedOut);
    }

    /// Signs `identity` in without credentials.
    pub fn sign_in_as(&self, identity: Identity) {
        tracing::info!("[IdentityProvider] Signed in as {}", identity.uid);
        self.state.send_replace(AuthState::SignedIn(identity));
    }

    pub fn sign_out(&self) {
        tracing::info!("[IdentityProvider] Signed out");
        self.state.send_replace(AuthState::SignedOut);
    }
}

impl IdentityProvider for InMemoryIdentityProvider {
    fn current_identity(&self) -> Option<Identity> {
        self.state.borrow().identity().cloned()
    }

    fn subscribe(&self) -> watch::Receiver<AuthState> {
        self.state.subscribe()
    }
}

#[async_trait]
impl Authenticator for InMemoryIdentityProvider {
    async fn login(&self, email: &str, password: &str) -> Result<Identity> {
        let accounts = self.accounts.lock().await;
        let account = accounts
            .get(email)
            .filter(|account| account.password == password)
            .ok_or_else(|| NotekeepError::Auth("auth/invalid-credential".to_string()))?;
        let identity = Identity {
            uid: account.uid.clone(),
            email: Some(email.to_string()),
        };
        drop(accounts);
        self.sign_in_as(identity.clone());
        Ok(identity)
    }

    async fn signup(&self, email: &str, password: &str) -> Result<Identity> {
        if !email.contains('@') {
            return Err(NotekeepError::Auth("auth/invalid-email".to_string()));
        }
        if password.chars().count() < MIN_PASSWORD_CHARS {
            return Err(NotekeepError::Auth("auth/weak-password".to_string()));
        }

        let mut accounts = self.accounts.lock().await;
        if accounts.contains_key(email) {
            return Err(NotekeepError::Auth("auth/email-already-in-use".to_string()));
        }
        let uid = uuid::Uuid::new_v4().simple().to_string();
        accounts.insert(
            email.to_string(),
            Account {
                uid: uid.clone(),
                password: password.to_string(),
            },
        );
        drop(accounts);

        let identity = Identity {
            uid,
            email: Some(email.to_string()),
        };
        self.sign_in_as(identity.clone());
        Ok(identity)
    }

    async fn reset_password(&self, email: &str) -> Result<()> {
        if self.accounts.lock().await.contains_key(email) {
            tracing::info!("[IdentityProvider] Password reset requested for {}", email);
            Ok(())
        } else {
            Err(NotekeepError::Auth("auth/user-not-found".to_string()))
        }
    }

    async fn logout(&self) -> Result<()> {
        self.sign_out();
        Ok(())
    }
}
