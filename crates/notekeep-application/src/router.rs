//! Router: resolves a path against the route table and follows the guard's
//! redirects until a route is entered.

use notekeep_core::config::NavigationConfig;
use notekeep_core::error::{NotekeepError, Result};
use notekeep_core::navigation::{NavigationDecision, RouteTable};
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::watch;

use crate::navigation_guard::NavigationGuard;

/// Where a `push` ended up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationResult {
    /// The route that was finally entered.
    pub path: String,
    /// Every redirect target followed on the way, in order.
    pub redirects: Vec<String>,
}

pub struct Router {
    table: RouteTable,
    guard: Arc<NavigationGuard>,
    max_redirects: usize,
    current: watch::Sender<Option<String>>,
}

impl Router {
    pub fn new(guard: Arc<NavigationGuard>, config: &NavigationConfig) -> Self {
        let (current, _) = watch::channel(None);
        Self {
            table: config.route_table(),
            guard,
            max_redirects: config.max_redirects,
            current,
        }
    }

    /// The route entered by the last successful `push`.
    pub fn current(&self) -> Option<String> {
        self.current.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<String>> {
        self.current.subscribe()
    }

    /// Navigates to `path`.
    ///
    /// Alias routes redirect without running the guard. Every other hop is a
    /// separate guarded transition.
    pub async fn push(&self, path: &str) -> Result<NavigationResult> {
        let mut target = path.to_string();
        let mut redirects = Vec::new();

        loop {
            let route = self
                .table
                .find(&target)
                .ok_or_else(|| NotekeepError::UnknownRoute {
                    path: target.clone(),
                })?;

            let next = match &route.redirect {
                Some(alias) => alias.clone(),
                None => match self.guard.guard(route).await {
                    NavigationDecision::Allow => {
                        tracing::info!("[Router] Entered {}", target);
                        self.current.send_replace(Some(target.clone()));
                        return Ok(NavigationResult {
                            path: target,
                            redirects,
                        });
                    }
                    NavigationDecision::Redirect(to) => to,
                },
            };

            tracing::debug!("[Router] {} -> {}", target, next);
            redirects.push(next.clone());
            if redirects.len() > self.max_redirects {
                tracing::error!(
                    "[Router] Navigation to {} did not settle after {} redirects",
                    path,
                    self.max_redirects
                );
                return Err(NotekeepError::RedirectLoop {
                    path: path.to_string(),
                    hops: self.max_redirects,
                });
            }
            target = next;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::AppContext;
    use crate::navigation_guard::ProfileExistenceCheck;
    use async_trait::async_trait;
    use notekeep_core::identity::Identity;
    use notekeep_core::navigation::Route;
    use notekeep_infrastructure::InMemoryIdentityProvider;

    struct FixedCheck(bool);

    #[async_trait]
    impl ProfileExistenceCheck for FixedCheck {
        async fn profile_exists(&self, _user_id: &str) -> anyhow::Result<bool> {
            Ok(self.0)
        }
    }

    fn router(signed_in: bool, has_profile: bool, config: NavigationConfig) -> Router {
        let identity = Arc::new(InMemoryIdentityProvider::new());
        if signed_in {
            identity.sign_in_as(Identity::new("user123"));
        } else {
            identity.resolve_signed_out();
        }
        let guard = NavigationGuard::new(
            identity,
            Arc::new(FixedCheck(has_profile)),
            Arc::new(AppContext::new()),
            &config,
        );
        Router::new(Arc::new(guard), &config)
    }

    #[tokio::test(start_paused = true)]
    async fn test_root_alias_lands_on_login_when_signed_out() {
        let router = router(false, false, NavigationConfig::default());

        let result = router.push("/").await.unwrap();

        assert_eq!(result.path, "/login");
        assert_eq!(result.redirects, vec!["/login"]);
        assert_eq!(router.current().as_deref(), Some("/login"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_signed_in_without_profile_chains_to_profile() {
        let router = router(true, false, NavigationConfig::default());

        let result = router.push("/").await.unwrap();

        assert_eq!(result.path, "/profile");
        assert_eq!(result.redirects, vec!["/login", "/notes", "/profile"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_signed_in_with_profile_enters_notes() {
        let router = router(true, true, NavigationConfig::default());

        let result = router.push("/notes").await.unwrap();

        assert_eq!(result.path, "/notes");
        assert!(result.redirects.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_unknown_route() {
        let router = router(true, true, NavigationConfig::default());

        let err = router.push("/nowhere").await.unwrap_err();

        assert_eq!(
            err,
            NotekeepError::UnknownRoute {
                path: "/nowhere".to_string()
            }
        );
        assert_eq!(router.current(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_redirect_loop_is_reported() {
        // The login route itself requires auth, so a signed-out user bounces forever.
        let config = NavigationConfig {
            routes: vec![Route::new("/login").auth(), Route::new("/notes").auth()],
            max_redirects: 3,
            ..NavigationConfig::default()
        };
        let router = router(false, false, config);

        let err = router.push("/notes").await.unwrap_err();

        assert_eq!(
            err,
            NotekeepError::RedirectLoop {
                path: "/notes".to_string(),
                hops: 3
            }
        );
    }
}
