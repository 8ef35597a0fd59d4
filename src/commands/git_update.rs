//! Git-based self-update of the backend.

use crate::models::update::{GitPathResult, GitStatus, UpdateRequest};
use crate::models::{ApiResponse, UpdateCheck, UpdateResult};
use crate::services::api_client::ApiClient;
use crate::services::endpoints::git_update;
use crate::services::request::{QueryParams, RequestBody};
use serde_json::json;

pub async fn status(client: &ApiClient) -> ApiResponse<GitStatus> {
    client.get(git_update::STATUS, &QueryParams::new()).await
}

/// Install a portable git on hosts without one.
pub async fn install_git(client: &ApiClient) -> ApiResponse<GitPathResult> {
    client.post(git_update::INSTALL, RequestBody::Empty).await
}

/// Ask whether upstream has commits the local checkout lacks.
pub async fn check(client: &ApiClient) -> ApiResponse<UpdateCheck> {
    client.get(git_update::CHECK, &QueryParams::new()).await
}

pub async fn update(client: &ApiClient, request: &UpdateRequest) -> ApiResponse<UpdateResult> {
    log::info!(
        "[update] Applying backend update (force: {}, stash: {}, backup: {})",
        request.force,
        request.stash_local,
        request.create_backup
    );
    client.post_json(git_update::UPDATE, request).await
}

pub async fn rollback(client: &ApiClient, commit_hash: &str) -> ApiResponse<UpdateResult> {
    log::info!("[update] Rolling back to {}", commit_hash);
    client
        .post(
            git_update::ROLLBACK,
            RequestBody::Json(json!({ "commit_hash": commit_hash })),
        )
        .await
}

pub async fn switch_branch(client: &ApiClient, branch: &str) -> ApiResponse<UpdateResult> {
    client
        .post(
            git_update::SWITCH_BRANCH,
            RequestBody::Json(json!({ "branch": branch })),
        )
        .await
}

/// Use a custom git executable.
pub async fn set_git_path(client: &ApiClient, path: &str) -> ApiResponse<GitPathResult> {
    client
        .post(git_update::SET_PATH, RequestBody::Json(json!({ "path": path })))
        .await
}

/// Go back to automatic git detection.
pub async fn clear_git_path(client: &ApiClient) -> ApiResponse<GitPathResult> {
    client.delete(git_update::CLEAR_PATH).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support;
    use reqwest::Method;

    #[tokio::test]
    async fn test_update_sends_default_options() {
        let (client, recorder) = test_support::client();

        update(&client, &UpdateRequest::default()).await;

        assert_eq!(
            recorder.last().body,
            RequestBody::Json(json!({"force": false, "stash_local": true, "create_backup": true}))
        );
    }

    #[tokio::test]
    async fn test_clear_git_path_is_delete() {
        let (client, recorder) = test_support::client();

        clear_git_path(&client).await;
        assert_eq!(recorder.last().method, Method::DELETE);
        assert_eq!(recorder.last().endpoint, "git_update/clear-path");
    }

    #[tokio::test]
    async fn test_check_decodes_update() {
        let (client, recorder) = test_support::client();
        recorder.reply(
            200,
            json!({"success": true, "has_update": true, "commits_behind": 3, "update_logs": ["a", "b", "c"]}),
        );

        let check = check(&client).await.into_data().unwrap();
        assert!(check.has_update);
        assert_eq!(check.commits_behind, 3);
        assert_eq!(check.update_logs.len(), 3);
    }
}
