//! MoFox WebUI - native client for the MoFox bot administration backend.
//!
//! The crate provides:
//! - [`services::ApiClient`]: credential handling, live/demo transports and
//!   outcome normalization for every backend call
//! - [`commands`]: typed operations per dashboard screen
//! - [`services::update_poller`]: background check for backend updates
//! - [`services::discovery_server`]: the fixed-port service that tells
//!   clients where the backend lives
//!
//! An [`AppContext`] ties the client and the poller together. Build one per
//! application (or per test); there is no global state.

pub mod commands;
pub mod error;
pub mod models;
pub mod services;

use error::AppError;
use serde::{Deserialize, Serialize};
use services::api_client::{ApiClient, ClientConfig};
use services::credentials::{JsonFileStore, KeyValueStore};
use services::update_poller::{PollerConfig, UpdatePoller, UpdatePollerHandle};
use std::path::Path;
use std::sync::Arc;

/// File the credential store is kept in, inside the app data directory.
pub const SETTINGS_FILE: &str = "settings.json";

/// Combined configuration of an [`AppContext`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub client: ClientConfig,
    pub poller: PollerConfig,
}

/// Shared application state.
#[derive(Debug, Clone)]
pub struct AppContext {
    pub client: Arc<ApiClient>,
    pub poller: UpdatePollerHandle,
}

impl AppContext {
    /// Build a context over the given store. Must be called inside a tokio
    /// runtime; the poller is spawned idle.
    pub fn new(config: AppConfig, store: Arc<dyn KeyValueStore>) -> Result<Self, AppError> {
        let client = Arc::new(ApiClient::new(config.client, store)?);
        Ok(Self::with_client(client, config.poller))
    }

    /// Build a context around an existing client.
    pub fn with_client(client: Arc<ApiClient>, poller: PollerConfig) -> Self {
        let poller = UpdatePoller::spawn(client.clone(), poller);
        Self { client, poller }
    }

    /// Build a context persisting the API key to `settings.json` in `data_dir`.
    pub fn open(config: AppConfig, data_dir: &Path) -> Result<Self, AppError> {
        let store = JsonFileStore::open(data_dir.join(SETTINGS_FILE))?;
        log::info!(
            "[api] Using settings at {} ({:?} mode)",
            store.path().display(),
            config.client.mode
        );
        Self::new(config, Arc::new(store))
    }

    /// Whether an API key is held. Drives route gating in the UI.
    pub fn is_authenticated(&self) -> bool {
        self.client.has_token()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use services::api_client::ClientMode;
    use services::credentials::{MemoryStore, TOKEN_KEY};
    use services::demo::DEMO_API_KEY;

    fn demo_config() -> AppConfig {
        AppConfig {
            client: ClientConfig {
                demo_latency_ms: 0,
                ..ClientConfig::demo()
            },
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_contexts_are_isolated() {
        let first = AppContext::new(demo_config(), Arc::new(MemoryStore::new())).unwrap();
        let second = AppContext::new(demo_config(), Arc::new(MemoryStore::new())).unwrap();

        first.client.set_token(Some("a")).unwrap();
        assert!(first.is_authenticated());
        assert!(!second.is_authenticated());
    }

    #[tokio::test]
    async fn test_open_persists_token_across_contexts() {
        let dir = tempfile::tempdir().unwrap();

        let ctx = AppContext::open(demo_config(), dir.path()).unwrap();
        let login = commands::auth::login(&ctx.client, DEMO_API_KEY).await;
        assert!(login.is_success());
        drop(ctx);

        let reopened = AppContext::open(demo_config(), dir.path()).unwrap();
        assert_eq!(reopened.client.token().as_deref(), Some(DEMO_API_KEY));

        let store = JsonFileStore::open(dir.path().join(SETTINGS_FILE)).unwrap();
        assert_eq!(store.get(TOKEN_KEY).unwrap().as_deref(), Some(DEMO_API_KEY));
    }

    #[tokio::test]
    async fn test_demo_poller_reports_no_update() {
        let ctx = AppContext::new(demo_config(), Arc::new(MemoryStore::new())).unwrap();
        assert_eq!(ctx.client.config().mode, ClientMode::Demo);

        let outcome = ctx.poller.check_now().await;
        assert_eq!(outcome, services::update_poller::CheckOutcome::NoUpdate);
        assert!(!ctx.poller.snapshot().await.has_new_update);
    }

    #[test]
    fn test_config_round_trip() {
        let config: AppConfig =
            serde_json::from_str(r#"{"poller": {"interval_secs": 60}}"#).unwrap();
        assert_eq!(config.poller.interval_secs, 60);
        assert_eq!(config.client, ClientConfig::default());
    }
}
