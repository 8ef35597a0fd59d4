//! First-run setup wizard models.

use serde::{Deserialize, Serialize};

/// Reply of `initialization/status`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InitStatus {
    pub is_initialized: bool,
    pub bot_config_exists: Option<bool>,
    pub model_config_exists: Option<bool>,
    pub has_api_key: Option<bool>,
    pub has_git_path: Option<bool>,
}

/// Identity and persona written to `bot_config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BotConfig {
    pub qq_account: u64,
    pub nickname: String,
    pub alias_names: Vec<String>,
    pub personality_core: String,
    pub identity: String,
    pub reply_style: String,
    /// `[platform, user_id]` pairs.
    pub master_users: Vec<(String, String)>,
}

/// Primary LLM provider written to `model_config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    pub api_key: String,
    pub provider_name: String,
    pub base_url: String,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            provider_name: "SiliconFlow".to_string(),
            base_url: "https://api.siliconflow.cn/v1".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GitConfig {
    pub git_path: String,
}

/// Format check of a provider API key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyValidation {
    pub valid: bool,
    pub message: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GitDetection {
    pub found: bool,
    pub path: Option<String>,
}
