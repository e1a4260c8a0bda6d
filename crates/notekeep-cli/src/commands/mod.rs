//! Command dispatch.
//!
//! Every command returns a JSON value; `main` prints it.

mod navigate;
mod note;
mod profile;

use anyhow::{Context, Result};
use notekeep_application::{AppServices, wait_for_initial_auth_state};
use notekeep_core::config::RootConfig;
use notekeep_core::error::NotekeepError;
use notekeep_core::identity::Identity;
use notekeep_infrastructure::paths::NotekeepPaths;
use notekeep_infrastructure::{ConfigService, InMemoryIdentityProvider, JsonDirDocumentStore};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

use crate::cli::{Cli, Commands};
use crate::logging;

/// Loads configuration, starts logging and runs the command.
pub async fn run(cli: Cli) -> Result<()> {
    let config = load_config(&cli).await?;
    let paths = resolve_paths(&cli, &config);
    let _log_guard = logging::init(&paths.logs_dir()?, &config.logging.level)?;

    let output = execute(cli, &config, &paths).await?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

async fn load_config(cli: &Cli) -> Result<RootConfig> {
    let service = match &cli.config {
        Some(path) => ConfigService::new(path),
        None => ConfigService::from_default_location()?,
    };
    service
        .get_config()
        .await
        .with_context(|| format!("Failed to load {}", service.path().display()))
}

/// `--data-dir` wins over `storage.data_dir`, which wins over the platform default.
fn resolve_paths(cli: &Cli, config: &RootConfig) -> NotekeepPaths {
    NotekeepPaths::new(
        cli.data_dir
            .clone()
            .or_else(|| config.storage.data_dir.clone()),
    )
}

async fn execute(cli: Cli, config: &RootConfig, paths: &NotekeepPaths) -> Result<Value> {
    let store_dir = paths.store_dir()?;
    let store = Arc::new(
        JsonDirDocumentStore::new(&store_dir)
            .await
            .with_context(|| format!("Failed to open store at {}", store_dir.display()))?,
    );

    let provider = Arc::new(InMemoryIdentityProvider::new());
    match cli.user {
        Some(uid) => provider.sign_in_as(Identity::new(uid)),
        None => provider.resolve_signed_out(),
    }

    let app = AppServices::new(config, store, provider.clone(), provider);
    wait_for_initial_auth_state(app.identity.as_ref()).await;

    match cli.command {
        Commands::Note { action } => note::run(&app, action).await,
        Commands::Profile { action } => profile::run(&app, action).await,
        Commands::Navigate { path } => navigate::run(&app, &path).await,
    }
}

fn current_user_id(app: &AppServices) -> Result<String, NotekeepError> {
    app.identity
        .current_identity()
        .map(|identity| identity.uid)
        .ok_or(NotekeepError::Unauthenticated)
}

fn to_json(value: &impl Serialize) -> Result<Value> {
    Ok(serde_json::to_value(value)?)
}
