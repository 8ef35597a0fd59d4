//! Per-plugin configuration models.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Entry of `plugin_config/list`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PluginConfigInfo {
    pub plugin_name: String,
    pub display_name: String,
    pub config_path: String,
    pub exists: bool,
    pub has_schema: bool,
    pub last_modified: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PluginConfigList {
    pub success: bool,
    pub configs: Vec<PluginConfigInfo>,
    pub total: u32,
    pub error: Option<String>,
}

/// Raw TOML plus its parsed form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PluginConfigContent {
    pub success: bool,
    pub plugin_name: String,
    pub content: Option<String>,
    pub parsed: Option<Map<String, Value>>,
    pub last_modified: Option<String>,
    pub error: Option<String>,
}

/// Field definitions grouped by section, used by the form editor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PluginSchema {
    pub success: bool,
    pub plugin_name: String,
    pub schema: Option<Map<String, Value>>,
    pub sections: Option<Vec<Value>>,
    pub layout: Option<Value>,
    pub error: Option<String>,
}

/// TOML syntax check. `line`/`col` point at the first error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PluginConfigValidation {
    pub success: bool,
    pub valid: bool,
    pub message: Option<String>,
    pub line: Option<u32>,
    pub col: Option<u32>,
    pub error: Option<String>,
}
