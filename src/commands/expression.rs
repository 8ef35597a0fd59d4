//! Learned expression management.

use crate::models::expression::{ExpressionListQuery, ExpressionStatistics};
use crate::models::{ActionResult, ApiResponse, Expression, ExpressionInput, ExpressionList};
use crate::services::api_client::ApiClient;
use crate::services::endpoints::expression;
use crate::services::request::{QueryParams, RequestBody};
use serde::Deserialize;
use serde_json::json;

/// Reply of `expression/batch-delete`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DeletedCount {
    pub deleted: u32,
}

pub async fn list(
    client: &ApiClient,
    query: &ExpressionListQuery,
) -> ApiResponse<ExpressionList> {
    client.get_query(expression::LIST, query).await
}

pub async fn detail(client: &ApiClient, id: i64) -> ApiResponse<Expression> {
    client.get(&expression::detail(id), &QueryParams::new()).await
}

pub async fn create(client: &ApiClient, input: &ExpressionInput) -> ApiResponse<Expression> {
    client.post_json(expression::CREATE, input).await
}

/// Replace an expression.
pub async fn update(
    client: &ApiClient,
    id: i64,
    input: &ExpressionInput,
) -> ApiResponse<ActionResult> {
    client.put_json(&expression::detail(id), input).await
}

pub async fn delete(client: &ApiClient, id: i64) -> ApiResponse<ActionResult> {
    client.delete(&expression::detail(id)).await
}

pub async fn batch_delete(client: &ApiClient, ids: &[i64]) -> ApiResponse<DeletedCount> {
    client
        .post(
            expression::BATCH_DELETE,
            RequestBody::Json(json!({ "expression_ids": ids })),
        )
        .await
}

/// Overall statistics, optionally limited to one chat.
pub async fn statistics(
    client: &ApiClient,
    chat_id: Option<&str>,
) -> ApiResponse<ExpressionStatistics> {
    let params = QueryParams::new().with_opt("chat_id", chat_id);
    client.get(expression::STATISTICS, &params).await
}
