//! LLM usage statistics per model, provider and module.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenUsage {
    pub total_calls: u64,
    pub prompt_tokens: u64,
    pub completion_tokens: u64,
    pub total_tokens: u64,
}

/// Token usage keyed by model name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelUsage {
    pub stats: HashMap<String, TokenUsage>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelOverview {
    pub total_models: u32,
    pub total_calls: u64,
    pub total_tokens: u64,
    pub total_cost: f64,
    pub most_used_model: Option<String>,
    pub most_expensive_model: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelDetail {
    pub model_name: String,
    pub total_calls: u64,
    pub prompt_tokens: u64,
    pub completion_tokens: u64,
    pub total_tokens: u64,
    pub total_cost: f64,
    pub avg_tokens_per_call: f64,
    pub avg_time_per_call: f64,
    /// Tokens per second.
    pub tps: f64,
    pub cost_per_ktok: f64,
}

/// Aggregate for one provider or one module. Modules report no `tps`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UsageAggregate {
    pub total_calls: u64,
    pub total_tokens: u64,
    pub total_cost: f64,
    pub avg_time: f64,
    pub tps: Option<f64>,
}

/// Aggregates keyed by provider or module name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupedStats {
    pub stats: HashMap<String, UsageAggregate>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub data: Vec<f64>,
}

/// Chart series keyed by chart id, e.g. `pie_chart_cost_by_provider`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartData {
    pub chart_data: HashMap<String, ChartSeries>,
}

/// Period a statistics query covers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeRange {
    #[serde(rename = "1h")]
    LastHour,
    #[default]
    #[serde(rename = "24h")]
    LastDay,
    #[serde(rename = "7d")]
    LastWeek,
    #[serde(rename = "30d")]
    LastMonth,
}

impl TimeRange {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LastHour => "1h",
            Self::LastDay => "24h",
            Self::LastWeek => "7d",
            Self::LastMonth => "30d",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_stats_without_tps() {
        let stats: GroupedStats = serde_json::from_str(
            r#"{"stats": {"chat": {"total_calls": 4, "total_tokens": 900, "total_cost": 0.2, "avg_time": 1.5}}}"#,
        )
        .unwrap();
        assert_eq!(stats.stats["chat"].total_calls, 4);
        assert_eq!(stats.stats["chat"].tps, None);
    }

    #[test]
    fn test_time_range_serializes_short_form() {
        assert_eq!(serde_json::to_string(&TimeRange::LastWeek).unwrap(), "\"7d\"");
        assert_eq!(TimeRange::default().as_str(), "24h");
    }
}
