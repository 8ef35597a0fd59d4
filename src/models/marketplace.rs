//! Plugin marketplace models.
//!
//! Listings, details and update checks come back as
//! [`Envelope<Value>`](super::Envelope); their shape follows the remote
//! plugin repository and is not fixed here.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstallRequest {
    pub plugin_id: String,
    pub repository_url: String,
    pub auto_load: bool,
}

impl InstallRequest {
    pub fn new(plugin_id: impl Into<String>, repository_url: impl Into<String>) -> Self {
        Self {
            plugin_id: plugin_id.into(),
            repository_url: repository_url.into(),
            auto_load: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstallResult {
    pub success: bool,
    pub message: String,
    /// Name the plugin registered under, which may differ from the repo name.
    pub plugin_name: Option<String>,
    pub loaded: bool,
}
