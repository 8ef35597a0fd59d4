//! Self-update of the UI bundle.

use crate::models::update::{UiBackupList, UiStatus, UiUpdateResult};
use crate::models::ApiResponse;
use crate::services::api_client::ApiClient;
use crate::services::endpoints::ui_update;
use crate::services::request::{QueryParams, RequestBody};
use serde_json::json;

pub async fn status(client: &ApiClient) -> ApiResponse<UiStatus> {
    client.get(ui_update::STATUS, &QueryParams::new()).await
}

pub async fn update(client: &ApiClient) -> ApiResponse<UiUpdateResult> {
    log::info!("[update] Updating UI bundle");
    client.post(ui_update::UPDATE, RequestBody::Empty).await
}

pub async fn backups(client: &ApiClient) -> ApiResponse<UiBackupList> {
    client.get(ui_update::BACKUPS, &QueryParams::new()).await
}

pub async fn rollback(client: &ApiClient, backup_name: &str) -> ApiResponse<UiUpdateResult> {
    log::info!("[update] Rolling UI bundle back to {}", backup_name);
    client
        .post(
            ui_update::ROLLBACK,
            RequestBody::Json(json!({ "backup_name": backup_name })),
        )
        .await
}
