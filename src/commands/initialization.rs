//! First-run setup wizard.
//!
//! The wizard writes `bot_config.toml` and `model_config.toml`, optionally
//! records a git path, and finally marks the installation as initialized.

use crate::models::initialization::{GitConfig, GitDetection, KeyValidation};
use crate::models::{ActionResult, ApiResponse, BotConfig, Envelope, InitStatus, ModelConfig};
use crate::services::api_client::ApiClient;
use crate::services::endpoints::initialization;
use crate::services::request::{QueryParams, RequestBody};
use serde_json::json;

pub async fn status(client: &ApiClient) -> ApiResponse<InitStatus> {
    client.get(initialization::STATUS, &QueryParams::new()).await
}

/// Current bot settings; `data` is `None` before the file exists.
pub async fn bot_config(client: &ApiClient) -> ApiResponse<Envelope<BotConfig>> {
    client.get(initialization::BOT_CONFIG, &QueryParams::new()).await
}

pub async fn save_bot_config(client: &ApiClient, config: &BotConfig) -> ApiResponse<ActionResult> {
    client.post_json(initialization::BOT_CONFIG, config).await
}

pub async fn model_config(client: &ApiClient) -> ApiResponse<Envelope<ModelConfig>> {
    client.get(initialization::MODEL_CONFIG, &QueryParams::new()).await
}

pub async fn save_model_config(
    client: &ApiClient,
    config: &ModelConfig,
) -> ApiResponse<ActionResult> {
    client.post_json(initialization::MODEL_CONFIG, config).await
}

pub async fn git_config(client: &ApiClient) -> ApiResponse<Envelope<GitConfig>> {
    client.get(initialization::GIT_CONFIG, &QueryParams::new()).await
}

pub async fn save_git_config(client: &ApiClient, git_path: &str) -> ApiResponse<ActionResult> {
    client
        .post_json(
            initialization::GIT_CONFIG,
            &GitConfig {
                git_path: git_path.to_string(),
            },
        )
        .await
}

/// Mark setup as done; the dashboard stops redirecting to the wizard.
pub async fn complete(client: &ApiClient) -> ApiResponse<ActionResult> {
    log::info!("[init] Completing first-run setup");
    client.post(initialization::COMPLETE, RequestBody::Empty).await
}

/// Format-only check of a provider key; no call is made to the provider.
pub async fn validate_api_key(client: &ApiClient, api_key: &str) -> ApiResponse<KeyValidation> {
    client
        .post(
            initialization::VALIDATE_API_KEY,
            RequestBody::Json(json!({ "api_key": api_key })),
        )
        .await
}

/// Look for a git executable on the backend host.
pub async fn detect_git(client: &ApiClient) -> ApiResponse<GitDetection> {
    client.get(initialization::DETECT_GIT, &QueryParams::new()).await
}
