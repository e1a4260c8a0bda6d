//! Application configuration model.
//!
//! Loaded from `config.toml`. Every section and field has a default, so an
//! empty or partial file is valid.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::navigation::{Route, RouteTable, default_routes};

/// Root of `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RootConfig {
    pub navigation: NavigationConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

/// Route table and guard behaviour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// Where unauthenticated users are sent.
    pub login_route: String,
    /// Where signed-in users are sent away from guest-only routes.
    pub default_route: String,
    /// The profile-creation route; never redirected to itself.
    pub profile_route: String,
    /// Delay before the global loading flag is cleared after a transition.
    pub loading_clear_delay_ms: u64,
    /// Maximum guard redirects followed by one `push`.
    pub max_redirects: usize,
    #[serde(rename = "route")]
    pub routes: Vec<Route>,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            login_route: "/login".to_string(),
            default_route: "/notes".to_string(),
            profile_route: "/profile".to_string(),
            loading_clear_delay_ms: 300,
            max_redirects: 8,
            routes: default_routes(),
        }
    }
}

impl NavigationConfig {
    pub fn loading_clear_delay(&self) -> Duration {
        Duration::from_millis(self.loading_clear_delay_ms)
    }

    pub fn route_table(&self) -> RouteTable {
        RouteTable::new(self.routes.clone())
    }
}

/// Document store location and collection names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Overrides the platform data directory.
    pub data_dir: Option<PathBuf>,
    pub notes_collection: String,
    pub profiles_collection: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            notes_collection: "notes".to_string(),
            profiles_collection: "profiles".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}
