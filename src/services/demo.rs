//! Offline demo transport.
//!
//! Answers every request from a static fixture table after a fixed delay.
//! Fixture selection depends only on the endpoint path (query string
//! ignored), so repeated calls always produce the same response. The login
//! fixture additionally checks the held API key against [`DEMO_API_KEY`].

use crate::error::AppError;
use crate::services::endpoints;
use crate::services::request::{ApiRequest, RawResponse};
use crate::services::transport::Transport;
use async_trait::async_trait;
use serde_json::{json, Value};
use std::time::Duration;

/// API key accepted by the demo login.
pub const DEMO_API_KEY: &str = "mofox-demo";

/// Default simulated latency.
pub const DEFAULT_DEMO_LATENCY_MS: u64 = 500;

/// Transport that never touches the network.
#[derive(Debug, Clone)]
pub struct DemoTransport {
    latency: Duration,
}

impl Default for DemoTransport {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_DEMO_LATENCY_MS))
    }
}

impl DemoTransport {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

#[async_trait]
impl Transport for DemoTransport {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, AppError> {
        tokio::time::sleep(self.latency).await;
        Ok(respond(request.path(), request.credential.as_deref()))
    }
}

/// Resolve a request against the fixture table.
pub fn respond(path: &str, credential: Option<&str>) -> RawResponse {
    let path = path.trim_start_matches('/');

    if path == endpoints::auth::LOGIN {
        return if credential == Some(DEMO_API_KEY) {
            RawResponse::json(200, &json!({"success": true, "message": "Login successful"}))
        } else {
            RawResponse::json(401, &json!({"error": "Invalid API key"}))
        };
    }

    match fixture(path) {
        Some(payload) => RawResponse::json(200, &payload),
        None => RawResponse::json(200, &json!({"success": true})),
    }
}

fn fixture(path: &str) -> Option<Value> {
    use endpoints::{git_update, initialization, log_viewer, stats};

    let payload = match path {
        stats::OVERVIEW => json!({
            "plugins": {"loaded": 12, "registered": 13, "failed": 1, "enabled": 11, "disabled": 1},
            "components": {
                "total": 45,
                "enabled": 40,
                "disabled": 5,
                "by_type": {
                    "action": {"total": 20, "enabled": 18, "disabled": 2},
                    "command": {"total": 15, "enabled": 14, "disabled": 1},
                    "tool": {"total": 10, "enabled": 8, "disabled": 2}
                }
            },
            "chats": {"total_streams": 128, "group_streams": 80, "private_streams": 48, "qq_streams": 128},
            "system": {"uptime_seconds": 123456.0, "memory_usage_mb": 450.0, "cpu_percent": 15.5}
        }),
        stats::SCHEDULE => json!({
            "date": "2025-12-20",
            "current_activity": {"time_range": "14:00 - 16:00", "activity": "Coding"},
            "activities": [
                {"time_range": "09:00 - 10:00", "activity": "Morning sync"},
                {"time_range": "10:00 - 12:00", "activity": "Requirements review"},
                {"time_range": "12:00 - 14:00", "activity": "Lunch break"},
                {"time_range": "14:00 - 16:00", "activity": "Coding"},
                {"time_range": "16:00 - 18:00", "activity": "Code review"}
            ]
        }),
        stats::MONTHLY_PLANS => json!({
            "month": "2025-12",
            "total": 5,
            "plans": [
                "Finish the WebUI rewrite",
                "Speed up plugin loading",
                "Ship v2.0",
                "Write developer docs",
                "Organize a community event"
            ]
        }),
        stats::LLM_STATS => json!({
            "total_requests": 1500,
            "total_cost": 12.5,
            "total_tokens": 2500000,
            "input_tokens": 1800000,
            "output_tokens": 700000
        }),
        stats::MESSAGE_STATS => message_stats(),
        stats::PLUGINS => json!({
            "total": 4,
            "plugins": [
                {"name": "core_actions", "display_name": "Core actions", "version": "1.0.0", "author": "MoFox Team", "enabled": true, "components_count": 5},
                {"name": "ai_chat", "display_name": "AI chat", "version": "2.1.0", "author": "MoFox Team", "enabled": true, "components_count": 3},
                {"name": "scheduler", "display_name": "Scheduled tasks", "version": "1.2.0", "author": "Community", "enabled": true, "components_count": 2},
                {"name": "weather", "display_name": "Weather", "version": "1.0.1", "author": "User123", "enabled": false, "components_count": 1}
            ]
        }),
        stats::COMPONENTS => json!({
            "component_type": "all",
            "total": 4,
            "enabled": 3,
            "disabled": 1,
            "components": [
                {"name": "EchoHandler", "plugin_name": "core_actions", "description": "Echo messages back", "enabled": true},
                {"name": "ChatGenerator", "plugin_name": "ai_chat", "description": "Generate replies", "enabled": true},
                {"name": "DailyReport", "plugin_name": "scheduler", "description": "Daily summary", "enabled": true},
                {"name": "WeatherTool", "plugin_name": "weather", "description": "Fetch weather", "enabled": false}
            ]
        }),
        log_viewer::FILES => json!({
            "success": true,
            "files": [
                {"name": "app.log.jsonl", "size": 20480, "size_human": "20.0 KB", "mtime": 1766212215.0, "mtime_human": "2025-12-20 14:30:15", "compressed": false}
            ]
        }),
        log_viewer::SEARCH => json!({
            "success": true,
            "total": 4,
            "offset": 0,
            "limit": 100,
            "entries": [
                {"timestamp": "2025-12-20 14:30:01", "level": "INFO", "logger_name": "core", "event": "System running", "alias": "Core", "line_number": 1, "file_name": "app.log.jsonl"},
                {"timestamp": "2025-12-20 14:30:05", "level": "DEBUG", "logger_name": "plugin_manager", "event": "Loading plugins", "alias": "PluginManager", "line_number": 2, "file_name": "app.log.jsonl"},
                {"timestamp": "2025-12-20 14:30:10", "level": "WARNING", "logger_name": "network", "event": "High latency", "alias": "Network", "line_number": 3, "file_name": "app.log.jsonl"},
                {"timestamp": "2025-12-20 14:30:15", "level": "ERROR", "logger_name": "weather", "event": "Plugin failed to load: ImportError", "line_number": 4, "file_name": "app.log.jsonl"}
            ]
        }),
        initialization::STATUS => json!({"is_initialized": true}),
        git_update::CHECK => json!({
            "success": true,
            "has_update": false,
            "current_commit": "a1b2c3d",
            "remote_commit": "a1b2c3d",
            "commits_behind": 0,
            "update_logs": [],
            "branch": "main"
        }),
        _ => return None,
    };

    Some(payload)
}

/// Fixed 24-point hourly series.
fn message_stats() -> Value {
    let points: Vec<Value> = (0..24u32)
        .map(|hour| {
            json!({
                "timestamp": format!("{}:00", hour),
                "received": (hour * 37 + 11) % 100,
                "sent": (hour * 53 + 7) % 100
            })
        })
        .collect();
    let total_received: u32 = (0..24u32).map(|h| (h * 37 + 11) % 100).sum();
    let total_sent: u32 = (0..24u32).map(|h| (h * 53 + 7) % 100).sum();

    json!({
        "data_points": points,
        "total_received": total_received,
        "total_sent": total_sent,
        "period": "24h"
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_requires_demo_key() {
        assert_eq!(respond("auth/login", Some(DEMO_API_KEY)).status, 200);
        assert_eq!(respond("auth/login", Some("wrong")).status, 401);
        assert_eq!(respond("auth/login", None).status, 401);
    }

    #[test]
    fn test_fixtures_are_deterministic() {
        let first = respond("stats/message-stats", None);
        let second = respond("stats/message-stats", Some("anything"));
        assert_eq!(first, second);
    }

    #[test]
    fn test_unknown_endpoint_is_generic_success() {
        let response = respond("emoji/batch", None);
        assert_eq!(response.status, 200);
        assert_eq!(response.body, r#"{"success":true}"#);
    }

    #[test]
    fn test_leading_slash_ignored() {
        assert_eq!(respond("/stats/overview", None), respond("stats/overview", None));
    }

    #[tokio::test(start_paused = true)]
    async fn test_transport_waits_for_latency() {
        use reqwest::header::HeaderMap;
        use reqwest::Method;

        let transport = DemoTransport::default();
        let started = tokio::time::Instant::now();
        let response = transport
            .send(ApiRequest {
                method: Method::GET,
                endpoint: "stats/overview?refresh=1".to_string(),
                body: Default::default(),
                headers: HeaderMap::new(),
                credential: None,
            })
            .await
            .unwrap();

        assert_eq!(response.status, 200);
        assert!(started.elapsed() >= Duration::from_millis(DEFAULT_DEMO_LATENCY_MS));
    }
}
