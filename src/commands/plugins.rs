//! Plugin lifecycle management.

use crate::models::plugin::{PluginComponent, PluginStatus};
use crate::models::stats::PluginList;
use crate::models::{ActionResult, ApiResponse, PluginDetail};
use crate::services::api_client::ApiClient;
use crate::services::endpoints::plugin;
use crate::services::request::{QueryParams, RequestBody};
use serde::{Deserialize, Serialize};

/// Lifecycle actions accepted by `plugin_manager/plugins/{name}/{action}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PluginAction {
    Enable,
    Disable,
    Reload,
    Unload,
    Load,
}

impl PluginAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Enable => "enable",
            Self::Disable => "disable",
            Self::Reload => "reload",
            Self::Unload => "unload",
            Self::Load => "load",
        }
    }
}

pub async fn list(client: &ApiClient) -> ApiResponse<PluginList> {
    client.get(plugin::LIST, &QueryParams::new()).await
}

pub async fn detail(client: &ApiClient, name: &str) -> ApiResponse<PluginDetail> {
    client.get(&plugin::detail(name), &QueryParams::new()).await
}

/// Run a lifecycle action on a plugin.
pub async fn apply(client: &ApiClient, name: &str, action: PluginAction) -> ApiResponse<ActionResult> {
    log::info!("[api] Plugin {}: {}", name, action.as_str());
    client
        .post(&plugin::action(name, action.as_str()), RequestBody::Empty)
        .await
}

/// Remove a plugin from disk.
pub async fn delete(client: &ApiClient, name: &str) -> ApiResponse<ActionResult> {
    log::info!("[api] Deleting plugin {}", name);
    client.delete(&plugin::delete(name)).await
}

pub async fn status(client: &ApiClient, name: &str) -> ApiResponse<PluginStatus> {
    client
        .get(&plugin::action(name, "status"), &QueryParams::new())
        .await
}

pub async fn components(client: &ApiClient, name: &str) -> ApiResponse<Vec<PluginComponent>> {
    client
        .get(&plugin::action(name, "components"), &QueryParams::new())
        .await
}

/// Enable or disable a single component of a plugin.
pub async fn set_component_enabled(
    client: &ApiClient,
    plugin_name: &str,
    component: &str,
    enabled: bool,
) -> ApiResponse<ActionResult> {
    let action = if enabled { "enable" } else { "disable" };
    client
        .post(
            &plugin::component_action(plugin_name, component, action),
            RequestBody::Empty,
        )
        .await
}
