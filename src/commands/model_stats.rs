//! LLM usage statistics.

use crate::models::model_stats::{ChartData, GroupedStats, ModelDetail, ModelOverview, ModelUsage};
use crate::models::{ApiResponse, TimeRange};
use crate::services::api_client::ApiClient;
use crate::services::endpoints::model_stats;
use crate::services::request::QueryParams;

fn range(time_range: TimeRange) -> QueryParams {
    QueryParams::new().with("time_range", time_range.as_str())
}

pub async fn usage(client: &ApiClient, time_range: TimeRange) -> ApiResponse<ModelUsage> {
    client.get(model_stats::MODEL_USAGE, &range(time_range)).await
}

pub async fn overview(client: &ApiClient, time_range: TimeRange) -> ApiResponse<ModelOverview> {
    client.get(model_stats::MODEL_OVERVIEW, &range(time_range)).await
}

pub async fn detail(
    client: &ApiClient,
    model_name: &str,
    time_range: TimeRange,
) -> ApiResponse<ModelDetail> {
    client
        .get(&model_stats::model_detail(model_name), &range(time_range))
        .await
}

pub async fn provider_stats(client: &ApiClient, time_range: TimeRange) -> ApiResponse<GroupedStats> {
    client.get(model_stats::PROVIDER_STATS, &range(time_range)).await
}

pub async fn module_stats(client: &ApiClient, time_range: TimeRange) -> ApiResponse<GroupedStats> {
    client.get(model_stats::MODULE_STATS, &range(time_range)).await
}

pub async fn chart_data(client: &ApiClient, time_range: TimeRange) -> ApiResponse<ChartData> {
    client.get(model_stats::CHART_DATA, &range(time_range)).await
}
