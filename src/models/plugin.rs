//! Plugin management and configuration-file models.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Component registered by a plugin.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PluginComponent {
    pub name: String,
    #[serde(alias = "type")]
    pub component_type: String,
    pub description: Option<String>,
    pub enabled: bool,
    pub details: Option<Value>,
}

/// Full plugin description from `plugin_manager/plugins/{name}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PluginDetail {
    pub name: String,
    pub display_name: String,
    pub version: String,
    pub author: String,
    pub description: Option<String>,
    pub enabled: bool,
    pub components: Vec<PluginComponent>,
    pub metadata: Value,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PluginStatus {
    pub name: String,
    pub loaded: bool,
    pub enabled: bool,
    pub error: Option<String>,
}

/// Entry of `config/list`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    pub name: String,
    pub path: String,
    /// `main`, `model` or `plugin`.
    #[serde(alias = "type")]
    pub config_type: String,
    pub plugin_name: Option<String>,
    pub size: Option<u64>,
    pub last_modified: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigList {
    pub success: bool,
    pub configs: Vec<ConfigFile>,
    pub total: u32,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigContent {
    pub success: bool,
    pub path: String,
    pub content: String,
    pub parsed: Option<Value>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigBackup {
    pub name: String,
    pub path: String,
    pub created_at: String,
    pub size: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigBackupList {
    pub success: bool,
    pub backups: Vec<ConfigBackup>,
    pub error: Option<String>,
}

/// Outcome of saving, updating or restoring a config file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigSaveResult {
    pub success: bool,
    pub message: Option<String>,
    pub backup_path: Option<String>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigValidation {
    pub valid: bool,
    pub errors: Vec<String>,
}
