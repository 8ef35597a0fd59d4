//! Configuration file management.
//!
//! Paths are relative to the backend's config root and keep their slashes,
//! e.g. `plugins/weather/config.toml`.

use crate::models::plugin::{ConfigBackupList, ConfigContent, ConfigList, ConfigSaveResult, ConfigValidation};
use crate::models::ApiResponse;
use crate::services::api_client::ApiClient;
use crate::services::endpoints::config;
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

pub async fn list(client: &ApiClient) -> ApiResponse<ConfigList> {
    client.get(config::LIST, &QueryParams::new()).await
}

pub async fn content(client: &ApiClient, path: &str) -> ApiResponse<ConfigContent> {
    client.get(&config::content(path), &QueryParams::new()).await
}

/// Field schema used by the visual editor; its shape varies per file.
pub async fn schema(client: &ApiClient, path: &str) -> ApiResponse<Value> {
    client.get(&config::schema(path), &QueryParams::new()).await
}

/// Replace a file with raw TOML.
pub async fn save(
    client: &ApiClient,
    path: &str,
    content: &str,
    create_backup: bool,
) -> ApiResponse<ConfigSaveResult> {
    client
        .post_json(
            &config::save(path),
            &SaveRequest {
                content,
                create_backup,
            },
        )
        .await
}

/// Apply key/value updates to a file.
pub async fn update(
    client: &ApiClient,
    path: &str,
    updates: &Map<String, Value>,
    create_backup: bool,
) -> ApiResponse<ConfigSaveResult> {
    client
        .post_json(
            &config::update(path),
            &UpdateRequest {
                updates,
                create_backup,
            },
        )
        .await
}

pub async fn backups(client: &ApiClient, path: &str) -> ApiResponse<ConfigBackupList> {
    client.get(&config::backups(path), &QueryParams::new()).await
}

/// Restore a file from one of its backups.
pub async fn restore(
    client: &ApiClient,
    path: &str,
    backup_name: &str,
) -> ApiResponse<ConfigSaveResult> {
    let endpoint = QueryParams::new()
        .with("backup_name", backup_name)
        .append_to(&config::restore(path));
    client.post(&endpoint, RequestBody::Empty).await
}

/// Check that `content` parses as TOML without saving it.
pub async fn validate(client: &ApiClient, content: &str) -> ApiResponse<ConfigValidation> {
    let endpoint = QueryParams::new()
        .with("content", content)
        .append_to(config::VALIDATE);
    client.post(&endpoint, RequestBody::Empty).await
}
