//! Emoji asset models.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmojiItem {
    pub id: i64,
    pub hash: String,
    pub description: String,
    pub emotions: Vec<String>,
    pub format: String,
    pub is_registered: bool,
    pub is_banned: bool,
    pub usage_count: u32,
    pub query_count: u32,
    pub record_time: f64,
    /// Base64-encoded thumbnail.
    pub thumbnail: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmojiDetail {
    pub id: i64,
    pub hash: String,
    pub description: String,
    pub emotions: Vec<String>,
    pub format: String,
    pub full_path: String,
    pub is_registered: bool,
    pub is_banned: bool,
    pub usage_count: u32,
    pub query_count: u32,
    pub last_used_time: Option<f64>,
    pub record_time: f64,
    pub register_time: Option<f64>,
    /// Base64-encoded full image.
    pub full_image: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmojiList {
    pub items: Vec<EmojiItem>,
    pub total: u32,
    pub page: u32,
    pub page_size: u32,
    pub total_pages: u32,
}

/// Filters for `emoji/list`. Unset fields are left out of the query string.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EmojiListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emotion_filter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    /// `asc` or `desc`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_registered: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_banned: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EmojiUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emotions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_banned: Option<bool>,
}

/// Bulk action applied by `emoji/batch`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmojiBatchAction {
    Delete,
    Ban,
    Unban,
}

/// Per-item result inside a batch or upload response. Failures are reported
/// here, inside a 2xx response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemResult {
    pub hash: Option<String>,
    pub filename: Option<String>,
    pub success: bool,
    pub message: Option<String>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchResult {
    pub processed: u32,
    pub succeeded: u32,
    pub failed: u32,
    pub results: Vec<ItemResult>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadResult {
    pub uploaded: u32,
    pub failed: u32,
    pub results: Vec<ItemResult>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmojiUsage {
    pub hash: String,
    pub description: String,
    pub usage_count: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmojiStats {
    pub total_count: u32,
    pub registered_count: u32,
    pub banned_count: u32,
    pub total_usage: u64,
    pub top_used: Vec<EmojiUsage>,
    pub emotions_distribution: HashMap<String, u32>,
}

/// `{success, data}` envelope the emoji, marketplace and git_env routes wrap
/// their payloads in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
    pub error: Option<String>,
}
