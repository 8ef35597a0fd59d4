//! Per-plugin configuration files.
//!
//! Addressed by plugin name rather than by path; the backend resolves
//! `config/plugins/<name>/config.toml` itself.

use crate::models::plugin::{ConfigBackupList, ConfigSaveResult};
use crate::models::plugin_config::{
    PluginConfigContent, PluginConfigList, PluginConfigValidation, PluginSchema,
};
use crate::models::ApiResponse;
use crate::services::api_client::ApiClient;
use crate::services::endpoints::plugin_config;
use crate::services::request::{QueryParams, RequestBody};
use serde::Serialize;
use serde_json::{Map, Value};

#[derive(Debug, Serialize)]
struct SaveRequest<'a> {
    content: &'a str,
    create_backup: bool,
}

#[derive(Debug, Serialize)]
struct UpdateRequest<'a> {
    updates: &'a Map<String, Value>,
    create_backup: bool,
}

pub async fn list(client: &ApiClient) -> ApiResponse<PluginConfigList> {
    client.get(plugin_config::LIST, &QueryParams::new()).await
}

pub async fn schema(client: &ApiClient, plugin: &str) -> ApiResponse<PluginSchema> {
    client
        .get(&plugin_config::action(plugin, "schema"), &QueryParams::new())
        .await
}

pub async fn content(client: &ApiClient, plugin: &str) -> ApiResponse<PluginConfigContent> {
    client
        .get(&plugin_config::action(plugin, "content"), &QueryParams::new())
        .await
}

pub async fn save(
    client: &ApiClient,
    plugin: &str,
    content: &str,
    create_backup: bool,
) -> ApiResponse<ConfigSaveResult> {
    client
        .post_json(
            &plugin_config::action(plugin, "save"),
            &SaveRequest {
                content,
                create_backup,
            },
        )
        .await
}

/// Apply dotted-key updates such as `"section.key"`.
pub async fn update(
    client: &ApiClient,
    plugin: &str,
    updates: &Map<String, Value>,
    create_backup: bool,
) -> ApiResponse<ConfigSaveResult> {
    client
        .post_json(
            &plugin_config::action(plugin, "update"),
            &UpdateRequest {
                updates,
                create_backup,
            },
        )
        .await
}

/// Rewrite the file from the plugin's schema defaults. The old file is
/// backed up first.
pub async fn reset(client: &ApiClient, plugin: &str) -> ApiResponse<ConfigSaveResult> {
    log::info!("[config] Resetting config of plugin {}", plugin);
    client
        .post(&plugin_config::action(plugin, "reset"), RequestBody::Empty)
        .await
}

pub async fn backups(client: &ApiClient, plugin: &str) -> ApiResponse<ConfigBackupList> {
    client
        .get(&plugin_config::action(plugin, "backups"), &QueryParams::new())
        .await
}

pub async fn restore(
    client: &ApiClient,
    plugin: &str,
    backup_name: &str,
) -> ApiResponse<ConfigSaveResult> {
    client
        .post(&plugin_config::restore(plugin, backup_name), RequestBody::Empty)
        .await
}

/// Check TOML syntax without saving. A parse error is a successful call
/// with `valid: false`.
pub async fn validate(
    client: &ApiClient,
    plugin: &str,
    content: &str,
) -> ApiResponse<PluginConfigValidation> {
    let endpoint = QueryParams::new()
        .with("content", content)
        .append_to(&plugin_config::action(plugin, "validate"));
    client.post(&endpoint, RequestBody::Empty).await
}
