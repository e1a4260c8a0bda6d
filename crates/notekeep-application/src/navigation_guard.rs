//! Navigation guard.
//!
//! Runs before every route transition and decides whether the target may be
//! entered. Each transition walks an explicit state machine:
//!
//! ```text
//! CheckingAuth ──► CheckingProfile ──► Allowed
//!      │                  │
//!      ├──────────────────┴──────────► Redirecting
//!      └─────────────────────────────► Allowed
//! ```
//!
//! The global loading flag is raised when a transition starts and cleared by
//! a detached task after `loading_clear_delay`. Overlapping transitions are
//! not serialised, so an earlier transition's clear may land while a later
//! one is still running.
//!
//! A failing profile check is logged and the navigation is allowed
//! (fail-open). A broken existence check therefore bypasses the profile
//! requirement rather than stranding the user.

use async_trait::async_trait;
use notekeep_core::config::NavigationConfig;
use notekeep_core::identity::IdentityProvider;
use notekeep_core::navigation::{GuardState, NavigationDecision, Route};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;

use crate::context::AppContext;
use crate::usecase::CheckProfileExists;

/// Profile existence lookup consulted for `requires_profile` routes.
#[async_trait]
pub trait ProfileExistenceCheck: Send + Sync {
    async fn profile_exists(&self, user_id: &str) -> anyhow::Result<bool>;
}

#[async_trait]
impl ProfileExistenceCheck for CheckProfileExists {
    async fn profile_exists(&self, user_id: &str) -> anyhow::Result<bool> {
        Ok(self.execute(Some(user_id)).await)
    }
}

pub struct NavigationGuard {
    identity: Arc<dyn IdentityProvider>,
    profile_check: Arc<dyn ProfileExistenceCheck>,
    context: Arc<AppContext>,
    login_route: String,
    default_route: String,
    profile_route: String,
    loading_clear_delay: Duration,
    state: watch::Sender<GuardState>,
}

impl NavigationGuard {
    pub fn new(
        identity: Arc<dyn IdentityProvider>,
        profile_check: Arc<dyn ProfileExistenceCheck>,
        context: Arc<AppContext>,
        config: &NavigationConfig,
    ) -> Self {
        let (state, _) = watch::channel(GuardState::Idle);
        Self {
            identity,
            profile_check,
            context,
            login_route: config.login_route.clone(),
            default_route: config.default_route.clone(),
            profile_route: config.profile_route.clone(),
            loading_clear_delay: config.loading_clear_delay(),
            state,
        }
    }

    /// The state reached by the most recent transition.
    pub fn state(&self) -> GuardState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<GuardState> {
        self.state.subscribe()
    }

    /// Guards one transition into `route`.
    ///
    /// Must be called from within a tokio runtime: the loading clear is
    /// scheduled with `tokio::spawn`.
    pub async fn guard(&self, route: &Route) -> NavigationDecision {
        self.context.loading.set(true);
        let decision = self.run(route).await;
        self.schedule_loading_clear();
        decision
    }

    async fn run(&self, route: &Route) -> NavigationDecision {
        let mut state = GuardState::CheckingAuth {
            target: route.path.clone(),
        };
        loop {
            self.transition(state.clone());
            state = match state {
                GuardState::CheckingAuth { target } => self.check_auth(route, target),
                GuardState::CheckingProfile { target, user_id } => {
                    self.check_profile(target, user_id).await
                }
                GuardState::Redirecting { to, .. } => return NavigationDecision::Redirect(to),
                GuardState::Allowed { .. } => return NavigationDecision::Allow,
                GuardState::Idle => {
                    debug_assert!(false, "guard transitions never lead back to Idle");
                    tracing::warn!("[NavigationGuard] Reached Idle mid-transition, allowing");
                    return NavigationDecision::Allow;
                }
            };
        }
    }

    fn check_auth(&self, route: &Route, target: String) -> GuardState {
        let identity = self.identity.current_identity();

        if route.requires_auth && identity.is_none() {
            return GuardState::Redirecting {
                from: target,
                to: self.login_route.clone(),
            };
        }
        if route.requires_guest && identity.is_some() {
            return GuardState::Redirecting {
                from: target,
                to: self.default_route.clone(),
            };
        }
        match identity {
            Some(identity) if route.requires_profile => GuardState::CheckingProfile {
                target,
                user_id: identity.uid,
            },
            _ => GuardState::Allowed { target },
        }
    }

    async fn check_profile(&self, target: String, user_id: String) -> GuardState {
        match self.profile_check.profile_exists(&user_id).await {
            Ok(false) if target != self.profile_route => GuardState::Redirecting {
                from: target,
                to: self.profile_route.clone(),
            },
            Ok(_) => GuardState::Allowed { target },
            Err(e) => {
                tracing::warn!(
                    "[NavigationGuard] Profile check for {} failed, allowing {}: {:#}",
                    user_id,
                    target,
                    e
                );
                GuardState::Allowed { target }
            }
        }
    }

    fn transition(&self, next: GuardState) {
        tracing::debug!("[NavigationGuard] {:?}", next);
        self.state.send_replace(next);
    }

    fn schedule_loading_clear(&self) {
        let context = Arc::clone(&self.context);
        let delay = self.loading_clear_delay;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            context.loading.set(false);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use notekeep_core::identity::Identity;
    use notekeep_infrastructure::InMemoryIdentityProvider;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::sync::Notify;

    enum CheckOutcome {
        Exists(bool),
        /// Answers only after `release` is notified.
        Held(bool),
        Fails,
    }

    struct StubProfileCheck {
        outcome: CheckOutcome,
        calls: AtomicUsize,
        release: Notify,
    }

    impl StubProfileCheck {
        fn new(outcome: CheckOutcome) -> Arc<Self> {
            Arc::new(Self {
                outcome,
                calls: AtomicUsize::new(0),
                release: Notify::new(),
            })
        }
    }

    #[async_trait]
    impl ProfileExistenceCheck for StubProfileCheck {
        async fn profile_exists(&self, _user_id: &str) -> anyhow::Result<bool> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match self.outcome {
                CheckOutcome::Exists(exists) => Ok(exists),
                CheckOutcome::Held(exists) => {
                    self.release.notified().await;
                    Ok(exists)
                }
                CheckOutcome::Fails => anyhow::bail!("backend unavailable"),
            }
        }
    }

    struct Fixture {
        guard: NavigationGuard,
        context: Arc<AppContext>,
        check: Arc<StubProfileCheck>,
    }

    fn fixture(signed_in: bool, outcome: CheckOutcome) -> Fixture {
        let identity = Arc::new(InMemoryIdentityProvider::new());
        if signed_in {
            identity.sign_in_as(Identity::new("user123"));
        } else {
            identity.resolve_signed_out();
        }
        let check = StubProfileCheck::new(outcome);
        let context = Arc::new(AppContext::new());
        let guard = NavigationGuard::new(
            identity,
            check.clone(),
            context.clone(),
            &NavigationConfig::default(),
        );
        Fixture {
            guard,
            context,
            check,
        }
    }

    fn redirect(to: &str) -> NavigationDecision {
        NavigationDecision::Redirect(to.to_string())
    }

    #[tokio::test(start_paused = true)]
    async fn test_signed_out_auth_route_redirects_to_login() {
        let f = fixture(false, CheckOutcome::Exists(true));

        let decision = f.guard.guard(&Route::new("/notes").auth().profile()).await;

        assert_eq!(decision, redirect("/login"));
        assert!(f.context.loading.get());
        assert_eq!(
            f.guard.state(),
            GuardState::Redirecting {
                from: "/notes".to_string(),
                to: "/login".to_string()
            }
        );
        assert_eq!(f.check.calls.load(Ordering::SeqCst), 0);

        tokio::time::sleep(Duration::from_millis(301)).await;
        assert!(!f.context.loading.get());
    }

    #[tokio::test(start_paused = true)]
    async fn test_signed_in_guest_route_redirects_to_default() {
        let f = fixture(true, CheckOutcome::Exists(true));

        let decision = f.guard.guard(&Route::new("/login").guest()).await;

        assert_eq!(decision, redirect("/notes"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_missing_profile_redirects_to_profile_route() {
        let f = fixture(true, CheckOutcome::Exists(false));

        let decision = f.guard.guard(&Route::new("/notes").auth().profile()).await;

        assert_eq!(decision, redirect("/profile"));
        assert_eq!(f.check.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_profile_route_never_redirects_to_itself() {
        let f = fixture(true, CheckOutcome::Exists(false));

        let decision = f.guard.guard(&Route::new("/profile").auth().profile()).await;

        assert_eq!(decision, NavigationDecision::Allow);
        assert_eq!(
            f.guard.state(),
            GuardState::Allowed {
                target: "/profile".to_string()
            }
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_existing_profile_is_allowed() {
        let f = fixture(true, CheckOutcome::Exists(true));

        let decision = f.guard.guard(&Route::new("/notes").auth().profile()).await;

        assert_eq!(decision, NavigationDecision::Allow);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_profile_check_fails_open() {
        let f = fixture(true, CheckOutcome::Fails);

        let decision = f.guard.guard(&Route::new("/notes").auth().profile()).await;

        assert_eq!(decision, NavigationDecision::Allow);
        assert_eq!(f.check.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_signed_out_profile_route_skips_check() {
        let f = fixture(false, CheckOutcome::Exists(false));

        let decision = f.guard.guard(&Route::new("/about").profile()).await;

        assert_eq!(decision, NavigationDecision::Allow);
        assert_eq!(f.check.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_waits_in_checking_profile_until_check_answers() {
        let f = fixture(true, CheckOutcome::Held(false));
        let route = Route::new("/notes").auth().profile();
        let mut rx = f.guard.subscribe();
        assert_eq!(f.guard.state(), GuardState::Idle);

        let observe = async {
            let pending = rx
                .wait_for(|state| matches!(state, GuardState::CheckingProfile { .. }))
                .await
                .unwrap()
                .clone();
            assert_eq!(
                pending,
                GuardState::CheckingProfile {
                    target: "/notes".to_string(),
                    user_id: "user123".to_string()
                }
            );
            assert_eq!(f.guard.state(), pending);
            assert!(f.context.loading.get());
            f.check.release.notify_one();
        };

        let (decision, ()) = tokio::join!(f.guard.guard(&route), observe);

        assert_eq!(decision, redirect("/profile"));
        assert_eq!(
            f.guard.state(),
            GuardState::Redirecting {
                from: "/notes".to_string(),
                to: "/profile".to_string()
            }
        );
        assert_eq!(f.check.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_overlapping_transitions_share_the_loading_flag() {
        let f = fixture(true, CheckOutcome::Exists(true));
        let route = Route::new("/notes").auth().profile();

        f.guard.guard(&route).await;
        tokio::time::sleep(Duration::from_millis(200)).await;
        f.guard.guard(&route).await;
        assert!(f.context.loading.get());

        // The first transition's clear fires while the second is still pending.
        tokio::time::sleep(Duration::from_millis(101)).await;
        assert!(!f.context.loading.get());
    }
}
