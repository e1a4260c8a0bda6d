//! Route table consumed by the navigation guard.

use serde::{Deserialize, Serialize};

/// One entry of the route table.
///
/// The guard only reads the three `requires_*` flags. A route with a
/// `redirect` is an alias and is resolved before any guard runs.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Route {
    pub path: String,
    pub requires_auth: bool,
    pub requires_guest: bool,
    pub requires_profile: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect: Option<String>,
}

impl Route {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Default::default()
        }
    }

    pub fn auth(mut self) -> Self {
        self.requires_auth = true;
        self
    }

    pub fn guest(mut self) -> Self {
        self.requires_guest = true;
        self
    }

    pub fn profile(mut self) -> Self {
        self.requires_profile = true;
        self
    }

    pub fn redirect_to(mut self, target: impl Into<String>) -> Self {
        self.redirect = Some(target.into());
        self
    }
}

/// Exact-path route lookup.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    pub fn new(routes: Vec<Route>) -> Self {
        Self { routes }
    }

    pub fn find(&self, path: &str) -> Option<&Route> {
        self.routes.iter().find(|route| route.path == path)
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }
}

/// The application's stock routes.
pub fn default_routes() -> Vec<Route> {
    vec![
        Route::new("/").redirect_to("/login"),
        Route::new("/login").guest(),
        Route::new("/signup").guest(),
        Route::new("/reset-password").guest(),
        Route::new("/profile").auth(),
        Route::new("/notes").auth().profile(),
    ]
}
