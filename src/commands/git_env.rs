//! Git environment of the backend host.
//!
//! Same detection as `git_update`, without the repository operations.

use crate::models::initialization::GitDetection;
use crate::models::update::{GitInstallGuide, GitPathResult, GitStatus};
use crate::models::{ApiResponse, Envelope};
use crate::services::api_client::ApiClient;
use crate::services::endpoints::{git_env, initialization};
use crate::services::request::{QueryParams, RequestBody};
use serde_json::json;

pub async fn status(client: &ApiClient) -> ApiResponse<GitStatus> {
    client.get(git_env::STATUS, &QueryParams::new()).await
}

/// Install git (a portable build on Windows, the package manager elsewhere).
pub async fn install(client: &ApiClient) -> ApiResponse<GitPathResult> {
    log::info!("[git] Installing git on the backend host");
    client.post(git_env::INSTALL, RequestBody::Empty).await
}

pub async fn set_path(client: &ApiClient, path: &str) -> ApiResponse<GitPathResult> {
    client
        .post(git_env::SET_PATH, RequestBody::Json(json!({ "path": path })))
        .await
}

/// Drop the custom path and fall back to detection.
pub async fn clear_path(client: &ApiClient) -> ApiResponse<GitPathResult> {
    client.delete(git_env::CLEAR_PATH).await
}

/// Search the host for a git executable.
///
/// `git_env` has no detection route of its own; the setup wizard's is used.
pub async fn auto_detect(client: &ApiClient) -> ApiResponse<GitDetection> {
    client.get(initialization::DETECT_GIT, &QueryParams::new()).await
}

pub async fn install_guide(client: &ApiClient) -> ApiResponse<Envelope<GitInstallGuide>> {
    client.get(git_env::INSTALL_GUIDE, &QueryParams::new()).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support;
    use reqwest::Method;

    #[tokio::test]
    async fn test_clear_path_is_delete() {
        let (client, recorder) = test_support::client();

        clear_path(&client).await;

        let request = recorder.last();
        assert_eq!(request.method, Method::DELETE);
        assert_eq!(request.endpoint, "git_env/clear-path");
    }

    #[tokio::test]
    async fn test_install_guide_decodes_commands() {
        let (client, recorder) = test_support::client();
        recorder.reply(
            200,
            json!({
                "success": true,
                "data": {
                    "platform": "Linux",
                    "method": "automatic",
                    "description": "package manager",
                    "manual_commands": {"Arch": "sudo pacman -S git"}
                }
            }),
        );

        let guide = install_guide(&client).await.into_data().unwrap().data.unwrap();

        assert_eq!(guide.platform, "Linux");
        assert_eq!(guide.manual_commands["Arch"], "sudo pacman -S git");
        assert!(guide.manual_url.is_none());
    }

    #[tokio::test]
    async fn test_auto_detect_uses_wizard_route() {
        let (client, recorder) = test_support::client();
        recorder.reply(200, json!({"found": true, "path": "/usr/bin/git"}));

        let detection = auto_detect(&client).await.into_data().unwrap();

        assert!(detection.found);
        assert_eq!(recorder.last().endpoint, "initialization/detect-git");
    }
}
