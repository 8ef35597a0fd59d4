//! Backend log files.

use crate::models::log_viewer::{LogFileList, LogStats, LoggerList};
use crate::models::{ApiResponse, LogSearchQuery, LogSearchResult};
use crate::services::api_client::ApiClient;
use crate::services::endpoints::log_viewer;
use crate::services::request::QueryParams;

/// Largest page the backend serves.
pub const MAX_PAGE_SIZE: u32 = 1000;

pub async fn files(client: &ApiClient) -> ApiResponse<LogFileList> {
    client.get(log_viewer::FILES, &QueryParams::new()).await
}

/// Filter one file. An oversized `limit` is clamped instead of being sent
/// to a backend that would reject it.
pub async fn search(client: &ApiClient, query: &LogSearchQuery) -> ApiResponse<LogSearchResult> {
    let mut query = query.clone();
    query.limit = query.limit.map(|limit| limit.clamp(1, MAX_PAGE_SIZE));
    client.get_query(log_viewer::SEARCH, &query).await
}

/// Loggers that appear in a file, with their display alias and color.
pub async fn loggers(client: &ApiClient, filename: &str) -> ApiResponse<LoggerList> {
    client
        .get(log_viewer::LOGGERS, &QueryParams::new().with("filename", filename))
        .await
}

pub async fn stats(client: &ApiClient, filename: &str) -> ApiResponse<LogStats> {
    client
        .get(log_viewer::STATS, &QueryParams::new().with("filename", filename))
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support;
    use serde_json::json;

    #[tokio::test]
    async fn test_search_sends_only_set_filters() {
        let (client, recorder) = test_support::client();
        let query = LogSearchQuery {
            level: Some("ERROR".to_string()),
            limit: Some(50),
            ..LogSearchQuery::new("app.log")
        };

        search(&client, &query).await;

        assert_eq!(
            recorder.last().endpoint,
            "log_viewer/search?filename=app.log&level=ERROR&limit=50"
        );
    }

    #[tokio::test]
    async fn test_search_clamps_limit() {
        let (client, recorder) = test_support::client();
        let query = LogSearchQuery {
            limit: Some(5000),
            regex: Some(true),
            ..LogSearchQuery::new("app.log")
        };

        search(&client, &query).await;

        assert_eq!(
            recorder.last().endpoint,
            "log_viewer/search?filename=app.log&limit=1000&regex=true"
        );
    }

    #[tokio::test]
    async fn test_stats_decode_counts() {
        let (client, recorder) = test_support::client();
        recorder.reply(
            200,
            json!({"success": true, "total": 3, "by_level": {"INFO": 2, "ERROR": 1}, "by_logger": {"core": 3}}),
        );

        let stats = stats(&client, "app.log").await.into_data().unwrap();

        assert_eq!(stats.total, 3);
        assert_eq!(stats.by_level["ERROR"], 1);
        assert_eq!(recorder.last().endpoint, "log_viewer/stats?filename=app.log");
    }
}
