//! Self-update models for the backend (git) and the UI bundle.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Git availability and repository state reported by the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GitStatus {
    pub git_available: bool,
    pub git_version: Option<String>,
    pub git_path: Option<String>,
    /// `custom`, `portable`, `system` or `unknown`.
    pub git_source: String,
    pub is_portable: bool,
    pub system_os: String,
    pub is_git_repo: bool,
    pub current_branch: Option<String>,
    pub available_branches: Vec<String>,
}

/// Result of asking the backend whether upstream has moved ahead.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateCheck {
    /// Payload-level success flag; `false` means the check itself failed.
    pub success: bool,

    /// Whether the remote has commits not present locally.
    pub has_update: bool,

    pub current_commit: Option<String>,
    pub remote_commit: Option<String>,

    /// Number of commits the local checkout is behind.
    pub commits_behind: u32,

    /// Human-readable change entries, newest first.
    pub update_logs: Vec<String>,

    pub branch: Option<String>,
    pub error: Option<String>,
}

/// Options for applying a backend update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateRequest {
    pub force: bool,
    pub stash_local: bool,
    pub create_backup: bool,
}

impl Default for UpdateRequest {
    fn default() -> Self {
        Self {
            force: false,
            stash_local: true,
            create_backup: true,
        }
    }
}

/// Outcome of update, rollback and branch operations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateResult {
    pub success: bool,
    pub message: String,
    pub updated_files: Vec<String>,
    pub backup_commit: Option<String>,
    pub current_branch: Option<String>,
    pub error: Option<String>,
    pub dependencies_installed: Option<bool>,
    pub dependencies_message: Option<String>,
    pub venv_type: Option<String>,
}

/// Outcome of installing git or changing its path.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GitPathResult {
    pub success: bool,
    pub message: String,
    pub git_path: Option<String>,
    pub git_version: Option<String>,
    pub install_path: Option<String>,
    pub error: Option<String>,
}

/// How git gets installed on the backend host.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GitInstallGuide {
    pub platform: String,
    /// `automatic` or `manual`.
    pub method: String,
    pub description: String,
    pub manual_url: Option<String>,
    /// Distribution or tool name to shell command.
    pub manual_commands: BTreeMap<String, String>,
}

/// UI bundle version and update availability.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiStatus {
    pub success: bool,
    pub has_update: bool,
    pub current_version: Option<String>,
    pub current_commit: Option<String>,
    pub latest_version: Option<String>,
    pub latest_commit: Option<String>,
    pub changelog: Vec<String>,
    pub commits_behind: Option<u32>,
    pub update_enabled: Option<bool>,
    pub current_branch: Option<String>,
    pub message: Option<String>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiUpdateResult {
    pub success: bool,
    pub message: String,
    pub version: Option<String>,
    pub backup_name: Option<String>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiBackupInfo {
    pub name: String,
    pub version: Option<String>,
    pub timestamp: String,
    pub size: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiBackupList {
    pub success: bool,
    pub data: Vec<UiBackupInfo>,
    pub error: Option<String>,
}
