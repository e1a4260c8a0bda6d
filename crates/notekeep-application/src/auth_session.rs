//! Authentication view-model service.

use notekeep_core::error::Result;
use notekeep_core::identity::{Authenticator, Identity};
use std::future::Future;
use std::sync::Arc;

use crate::context::AppContext;

/// Forwards credential requests to the identity provider while tracking
/// `auth_loading` and `auth_error` in the context.
///
/// Failures are recorded and then returned to the caller.
pub struct AuthSession {
    authenticator: Arc<dyn Authenticator>,
    context: Arc<AppContext>,
}

impl AuthSession {
    pub fn new(authenticator: Arc<dyn Authenticator>, context: Arc<AppContext>) -> Self {
        Self {
            authenticator,
            context,
        }
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<Identity> {
        self.track("login", self.authenticator.login(email, password))
            .await
    }

    pub async fn signup(&self, email: &str, password: &str) -> Result<Identity> {
        self.track("signup", self.authenticator.signup(email, password))
            .await
    }

    pub async fn reset_password(&self, email: &str) -> Result<()> {
        self.track("reset_password", self.authenticator.reset_password(email))
            .await
    }

    /// Signs out and forgets the previous user's profile state.
    pub async fn logout(&self) -> Result<()> {
        self.authenticator.logout().await?;
        self.context.reset_profile_state();
        Ok(())
    }

    async fn track<T>(&self, action: &str, request: impl Future<Output = Result<T>>) -> Result<T> {
        self.context.auth_error.set(None);
        self.context.auth_loading.set(true);

        let result = request.await;

        if let Err(e) = &result {
            tracing::error!("[AuthSession] {} failed: {}", action, e);
            self.context.auth_error.set(Some(e.to_string()));
        }
        self.context.auth_loading.set(false);
        result
    }
}
