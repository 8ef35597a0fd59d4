//! Dashboard statistics models.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PluginStats {
    pub loaded: u32,
    pub registered: u32,
    pub failed: u32,
    pub enabled: u32,
    pub disabled: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComponentStats {
    pub total: u32,
    pub enabled: u32,
    pub disabled: u32,
    /// Per component type, counts keyed by `total`/`enabled`/`disabled`.
    pub by_type: HashMap<String, HashMap<String, u32>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatStats {
    pub total_streams: u32,
    pub group_streams: u32,
    pub private_streams: u32,
    pub qq_streams: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemStats {
    pub uptime_seconds: f64,
    pub memory_usage_mb: f64,
    pub cpu_percent: f64,
}

/// Everything the dashboard landing page shows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardOverview {
    pub plugins: PluginStats,
    pub components: ComponentStats,
    pub chats: ChatStats,
    pub system: SystemStats,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleActivity {
    pub time_range: String,
    pub activity: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Schedule {
    pub date: String,
    pub activities: Vec<ScheduleActivity>,
    pub current_activity: Option<ScheduleActivity>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonthlyPlans {
    pub plans: Vec<String>,
    pub total: u32,
    pub month: String,
}

/// Window covered by the LLM and message statistics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatsPeriod {
    LastHour,
    #[default]
    Last24Hours,
    Last7Days,
    Last30Days,
}

impl StatsPeriod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LastHour => "last_hour",
            Self::Last24Hours => "last_24_hours",
            Self::Last7Days => "last_7_days",
            Self::Last30Days => "last_30_days",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmStats {
    pub total_requests: u64,
    pub total_cost: f64,
    pub total_tokens: u64,
    pub input_tokens: u64,
    pub output_tokens: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageStatsPoint {
    pub timestamp: String,
    pub received: u32,
    pub sent: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageStats {
    pub data_points: Vec<MessageStatsPoint>,
    pub total_received: u64,
    pub total_sent: u64,
    pub period: String,
}

/// Plugin row as listed on the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PluginListItem {
    pub name: String,
    pub display_name: String,
    pub version: String,
    pub author: String,
    pub enabled: bool,
    pub components_count: u32,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PluginList {
    pub plugins: Vec<PluginListItem>,
    pub total: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PluginsByStatus {
    pub loaded: Vec<PluginListItem>,
    pub failed: Vec<PluginListItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComponentItem {
    pub name: String,
    pub plugin_name: String,
    pub description: String,
    pub enabled: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComponentsByType {
    pub component_type: String,
    pub components: Vec<ComponentItem>,
    pub total: u32,
    pub enabled: u32,
    pub disabled: u32,
}

/// Generic `{success, message}` acknowledgement.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActionResult {
    pub success: bool,
    pub message: Option<String>,
    pub error: Option<String>,
}
