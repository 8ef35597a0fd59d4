//! Backend origin discovery.
//!
//! The backend runs a small service on a fixed port that reports where the
//! main HTTP server lives. The answer is fetched once and cached until
//! [`DiscoveryClient::invalidate`] is called.

use crate::error::AppError;
use crate::models::ServerInfo;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

/// Default address of the discovery service.
pub const DEFAULT_DISCOVERY_URL: &str = "http://127.0.0.1:12138";

/// Path of the server-info endpoint on the discovery service.
pub const SERVER_INFO_PATH: &str = "/api/server-info";

/// Path of the health endpoint on the discovery service.
pub const HEALTH_PATH: &str = "/api/health";

/// Timeout for discovery lookups.
const DISCOVERY_TIMEOUT_SECS: u64 = 10;

/// Client for the discovery service with an in-memory cache.
#[derive(Debug, Clone)]
pub struct DiscoveryClient {
    client: Client,
    discovery_url: String,
    cached: Arc<RwLock<Option<ServerInfo>>>,
}

impl DiscoveryClient {
    pub fn new(discovery_url: impl Into<String>) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(DISCOVERY_TIMEOUT_SECS))
            .build()
            .map_err(|e| AppError::internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            discovery_url: discovery_url.into().trim_end_matches('/').to_string(),
            cached: Arc::new(RwLock::new(None)),
        })
    }

    pub fn discovery_url(&self) -> &str {
        &self.discovery_url
    }

    /// Return the backend location, querying the discovery service on first use.
    pub async fn server_info(&self) -> Result<ServerInfo, AppError> {
        if let Some(info) = self.cached.read().await.clone() {
            return Ok(info);
        }

        let mut cached = self.cached.write().await;
        // Another caller may have filled the cache while we waited.
        if let Some(info) = cached.clone() {
            return Ok(info);
        }

        let info = self.fetch_server_info().await?;
        log::info!(
            "[discovery] Backend located at {}:{}",
            info.host,
            info.port
        );
        *cached = Some(info.clone());
        Ok(info)
    }

    /// Drop the cached location so the next lookup queries the service again.
    pub async fn invalidate(&self) {
        *self.cached.write().await = None;
    }

    /// Currently cached location, without any I/O.
    pub async fn cached(&self) -> Option<ServerInfo> {
        self.cached.read().await.clone()
    }

    /// Check that the discovery service answers its health endpoint.
    pub async fn health(&self) -> Result<bool, AppError> {
        let url = format!("{}{}", self.discovery_url, HEALTH_PATH);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::discovery_at(AppError::from(e).detail(), &url))?;
        Ok(response.status().is_success())
    }

    async fn fetch_server_info(&self) -> Result<ServerInfo, AppError> {
        let url = format!("{}{}", self.discovery_url, SERVER_INFO_PATH);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::discovery_at(AppError::from(e).detail(), &url))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::discovery_at(
                format!("Discovery service returned {}", status.as_u16()),
                &url,
            ));
        }

        response.json::<ServerInfo>().await.map_err(|e| {
            AppError::discovery_at(format!("Invalid server info: {}", e), &url)
        })
    }
}
