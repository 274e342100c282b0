use crate::AppResult;

use st_auth::{IdentityProvider, InMemoryIdentityProvider, SessionStore};
use st_client::{AuthTokenCache, IdentityToolkitClient, RealtimeDbClient};
use st_config::{BackendKind, Config, ConfigError};
use st_controller::ScreenController;
use st_db::{InMemoryRecordStore, RecordStore, SleepEventRecorder};

use std::sync::Arc;

use log::{info, warn};

/// Wire a [`ScreenController`] to the backend selected in `config`.
///
/// Expects a validated config; missing remote settings are still reported
/// as [`ConfigError`] rather than panicking.
pub fn build_controller(config: &Config) -> AppResult<ScreenController> {
    let (provider, store) = match config.backend {
        BackendKind::Memory => memory_backend(),
        BackendKind::Remote => remote_backend(config)?,
    };

    Ok(ScreenController::new(
        SessionStore::new(provider),
        SleepEventRecorder::new(store),
    ))
}

fn memory_backend() -> (Arc<dyn IdentityProvider>, Arc<dyn RecordStore>) {
    warn!("Using in-memory backend: accounts and sleep records are lost on exit");

    (
        Arc::new(InMemoryIdentityProvider::new()),
        Arc::new(InMemoryRecordStore::new()),
    )
}

fn remote_backend(
    config: &Config,
) -> AppResult<(Arc<dyn IdentityProvider>, Arc<dyn RecordStore>)> {
    let api_key = config
        .identity
        .api_key
        .as_deref()
        .ok_or_else(|| ConfigError::identity("api_key is required for the remote backend"))?;
    let database_url = config
        .database
        .base_url()
        .ok_or_else(|| ConfigError::database("url is required for the remote backend"))?;

    let tokens = AuthTokenCache::new();
    let provider = IdentityToolkitClient::new(config.identity.base_url(), api_key, tokens.clone());
    let store = RealtimeDbClient::new(database_url, tokens);

    info!(
        "Using remote backend: identity {}, database {database_url}",
        config.identity.base_url()
    );

    Ok((Arc::new(provider), Arc::new(store)))
}
