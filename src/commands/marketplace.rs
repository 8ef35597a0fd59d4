//! Plugin marketplace.

use crate::models::marketplace::{InstallRequest, InstallResult};
use crate::models::{ActionResult, ApiResponse, Envelope};
use crate::services::api_client::ApiClient;
use crate::services::endpoints::marketplace;
use crate::services::request::{QueryParams, RequestBody};
use serde_json::Value;

pub async fn list(client: &ApiClient) -> ApiResponse<Envelope<Value>> {
    client.get(marketplace::LIST, &QueryParams::new()).await
}

pub async fn detail(client: &ApiClient, plugin_id: &str) -> ApiResponse<Envelope<Value>> {
    client
        .get(&marketplace::detail(plugin_id), &QueryParams::new())
        .await
}

/// Clone a plugin repository into the plugins directory and load it.
pub async fn install(client: &ApiClient, request: &InstallRequest) -> ApiResponse<InstallResult> {
    log::info!(
        "[market] Installing {} from {}",
        request.plugin_id,
        request.repository_url
    );
    client.post_json(marketplace::INSTALL, request).await
}

pub async fn update(client: &ApiClient, plugin_id: &str) -> ApiResponse<ActionResult> {
    log::info!("[market] Updating {}", plugin_id);
    client
        .post(&marketplace::update(plugin_id), RequestBody::Empty)
        .await
}

/// Installed marketplace plugins with a newer upstream version.
pub async fn check_updates(client: &ApiClient) -> ApiResponse<Envelope<Value>> {
    client.get(marketplace::CHECK_UPDATES, &QueryParams::new()).await
}
