//! Dashboard statistics and system control.

use crate::models::stats::{
    ComponentsByType, LlmStats, MessageStats, MonthlyPlans, PluginList, PluginsByStatus, Schedule,
    StatsPeriod, SystemStats,
};
use crate::models::{ActionResult, ApiResponse, DashboardOverview, PluginDetail};
use crate::services::api_client::ApiClient;
use crate::services::endpoints::stats;
use crate::services::request::{QueryParams, RequestBody};

pub async fn overview(client: &ApiClient) -> ApiResponse<DashboardOverview> {
    client.get(stats::OVERVIEW, &QueryParams::new()).await
}

pub async fn system(client: &ApiClient) -> ApiResponse<SystemStats> {
    client.get(stats::SYSTEM, &QueryParams::new()).await
}

pub async fn schedule(client: &ApiClient) -> ApiResponse<Schedule> {
    client.get(stats::SCHEDULE, &QueryParams::new()).await
}

pub async fn monthly_plans(client: &ApiClient) -> ApiResponse<MonthlyPlans> {
    client.get(stats::MONTHLY_PLANS, &QueryParams::new()).await
}

/// LLM usage totals; `None` leaves the window to the backend (24 hours).
pub async fn llm_stats(client: &ApiClient, period: Option<StatsPeriod>) -> ApiResponse<LlmStats> {
    let params = QueryParams::new().with_opt("period", period.map(|p| p.as_str()));
    client.get(stats::LLM_STATS, &params).await
}

/// Hourly received/sent message counts.
pub async fn message_stats(
    client: &ApiClient,
    period: Option<StatsPeriod>,
) -> ApiResponse<MessageStats> {
    let params = QueryParams::new().with_opt("period", period.map(|p| p.as_str()));
    client.get(stats::MESSAGE_STATS, &params).await
}

pub async fn plugins(client: &ApiClient) -> ApiResponse<PluginList> {
    client.get(stats::PLUGINS, &QueryParams::new()).await
}

pub async fn plugin_detail(client: &ApiClient, name: &str) -> ApiResponse<PluginDetail> {
    client.get(&stats::plugin(name), &QueryParams::new()).await
}

pub async fn plugins_by_status(client: &ApiClient) -> ApiResponse<PluginsByStatus> {
    client.get(stats::PLUGINS_BY_STATUS, &QueryParams::new()).await
}

pub async fn components(client: &ApiClient) -> ApiResponse<ComponentsByType> {
    client.get(stats::COMPONENTS, &QueryParams::new()).await
}

/// Components of one type, e.g. `action`, `command` or `tool`.
pub async fn components_by_type(
    client: &ApiClient,
    component_type: &str,
) -> ApiResponse<ComponentsByType> {
    client
        .get(&stats::components_by_type(component_type), &QueryParams::new())
        .await
}

/// Ask the bot process to restart.
pub async fn restart(client: &ApiClient) -> ApiResponse<ActionResult> {
    log::info!("[api] Requesting backend restart");
    client.post(stats::RESTART, RequestBody::Empty).await
}

/// Ask the bot process to shut down.
pub async fn shutdown(client: &ApiClient) -> ApiResponse<ActionResult> {
    log::info!("[api] Requesting backend shutdown");
    client.post(stats::SHUTDOWN, RequestBody::Empty).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support;
    use reqwest::Method;
    use serde_json::json;

    #[tokio::test]
    async fn test_overview_decodes_payload() {
        let (client, recorder) = test_support::client();
        recorder.reply(
            200,
            json!({"plugins": {"loaded": 3, "failed": 1}, "system": {"cpu_percent": 12.5}}),
        );

        let overview = overview(&client).await.into_data().unwrap();
        assert_eq!(overview.plugins.loaded, 3);
        assert_eq!(overview.plugins.failed, 1);
        assert_eq!(overview.system.cpu_percent, 12.5);
    }

    #[tokio::test]
    async fn test_message_stats_period_param() {
        let (client, recorder) = test_support::client();

        message_stats(&client, Some(StatsPeriod::Last7Days)).await;
        assert_eq!(recorder.last().endpoint, "stats/message-stats?period=last_7_days");

        message_stats(&client, None).await;
        assert_eq!(recorder.last().endpoint, "stats/message-stats");
    }

    #[tokio::test]
    async fn test_restart_is_post() {
        let (client, recorder) = test_support::client();
        restart(&client).await;
        assert_eq!(recorder.last().method, Method::POST);
        assert_eq!(recorder.last().endpoint, "stats/system/restart");
    }
}
