//! Configuration service implementation.
//!
//! Loads the root configuration from `config.toml` and caches it.

use notekeep_core::config::RootConfig;
use notekeep_core::error::{NotekeepError, Result};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;

use crate::paths::NotekeepPaths;

/// Configuration service that loads and caches the root configuration.
///
/// A missing file yields the defaults; a file that does not parse is an error
/// rather than being silently replaced.
#[derive(Debug)]
pub struct ConfigService {
    path: PathBuf,
    config: RwLock<Option<RootConfig>>,
}

impl ConfigService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            config: RwLock::new(None),
        }
    }

    /// Uses the platform config file location.
    pub fn from_default_location() -> Result<Self> {
        let path = NotekeepPaths::config_file().map_err(|e| NotekeepError::config(e.to_string()))?;
        Ok(Self::new(path))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Gets the root configuration, loading from file if not cached.
    pub async fn get_config(&self) -> Result<RootConfig> {
        if let Some(cached) = self.config.read().await.as_ref() {
            return Ok(cached.clone());
        }

        let loaded = Self::load(&self.path).await?;
        *self.config.write().await = Some(loaded.clone());
        Ok(loaded)
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub async fn invalidate_cache(&self) {
        *self.config.write().await = None;
    }

    async fn load(path: &Path) -> Result<RootConfig> {
        let content = match tokio::fs::read_to_string(path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(
                    "[ConfigService] {} not found, using defaults",
                    path.display()
                );
                return Ok(RootConfig::default());
            }
            Err(e) => return Err(e.into()),
        };

        toml::from_str(&content).map_err(|e| {
            NotekeepError::config(format!("Failed to parse {}: {}", path.display(), e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_missing_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let service = ConfigService::new(temp_dir.path().join("config.toml"));

        assert_eq!(service.get_config().await.unwrap(), RootConfig::default());
    }

    #[tokio::test]
    async fn test_reads_and_caches() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[storage]\nnotes_collection = \"memos\"\n").unwrap();
        let service = ConfigService::new(&path);

        assert_eq!(
            service.get_config().await.unwrap().storage.notes_collection,
            "memos"
        );

        std::fs::write(&path, "[storage]\nnotes_collection = \"changed\"\n").unwrap();
        assert_eq!(
            service.get_config().await.unwrap().storage.notes_collection,
            "memos"
        );

        service.invalidate_cache().await;
        assert_eq!(
            service.get_config().await.unwrap().storage.notes_collection,
            "changed"
        );
    }

    #[tokio::test]
    async fn test_malformed_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[navigation\n").unwrap();

        let err = ConfigService::new(&path).get_config().await.unwrap_err();
        assert!(matches!(err, NotekeepError::Config(_)));
    }
}
