//! Log viewer models.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Log file on the backend host.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogFile {
    pub name: String,
    pub size: u64,
    pub size_human: String,
    /// Unix seconds.
    pub mtime: f64,
    pub mtime_human: String,
    pub compressed: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogFileList {
    pub success: bool,
    pub files: Vec<LogFile>,
}

/// Single parsed log line.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogEntry {
    pub timestamp: String,
    pub level: String,
    pub logger_name: String,
    pub event: String,
    pub color: Option<String>,
    pub alias: Option<String>,
    pub extra: Option<Value>,
    pub line_number: u64,
    pub file_name: String,
}

/// Filters for `log_viewer/search`. Only `filename` is required.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LogSearchQuery {
    pub filename: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logger_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    /// 1..=1000 on the backend; 100 when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regex: Option<bool>,
}

impl LogSearchQuery {
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            ..Default::default()
        }
    }
}

/// One page of matching entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSearchResult {
    pub success: bool,
    pub entries: Vec<LogEntry>,
    pub total: u64,
    pub offset: u32,
    pub limit: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerInfo {
    pub name: String,
    pub alias: String,
    pub color: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerList {
    pub success: bool,
    pub loggers: Vec<LoggerInfo>,
}

/// Line counts of one file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogStats {
    pub success: bool,
    pub total: u64,
    pub by_level: BTreeMap<String, u64>,
    pub by_logger: BTreeMap<String, u64>,
}
