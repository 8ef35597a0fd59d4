//! Live chat history and sending.
//!
//! Realtime updates arrive over the websocket built by
//! [`services::live_chat`](crate::services::live_chat); these calls cover
//! the REST side.

use crate::models::live_chat::{MessageList, ReplyLookup, SendResult, StreamList};
use crate::models::{ApiResponse, OutgoingMessage};
use crate::services::api_client::ApiClient;
use crate::services::endpoints::live_chat;
use crate::services::request::QueryParams;

/// Most recently active conversations, optionally for one platform.
pub async fn streams(
    client: &ApiClient,
    limit: Option<u32>,
    platform: Option<&str>,
) -> ApiResponse<StreamList> {
    let params = QueryParams::new()
        .with_opt("limit", limit)
        .with_opt("platform", platform);
    client.get(live_chat::STREAMS, &params).await
}

/// Messages of one conversation from the last `hours`.
pub async fn messages(
    client: &ApiClient,
    stream_id: &str,
    hours: Option<f64>,
    limit: Option<u32>,
) -> ApiResponse<MessageList> {
    let params = QueryParams::new()
        .with_opt("hours", hours)
        .with_opt("limit", limit);
    client.get(&live_chat::messages(stream_id), &params).await
}

pub async fn reply_source(
    client: &ApiClient,
    stream_id: &str,
    message_id: &str,
) -> ApiResponse<ReplyLookup> {
    client
        .get(&live_chat::reply(stream_id, message_id), &QueryParams::new())
        .await
}

pub async fn send(client: &ApiClient, message: &OutgoingMessage) -> ApiResponse<SendResult> {
    client.post_json(live_chat::SEND, message).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support;
    use crate::services::request::RequestBody;
    use serde_json::json;

    #[tokio::test]
    async fn test_messages_query() {
        let (client, recorder) = test_support::client();

        messages(&client, "abc", Some(2.5), None).await;

        assert_eq!(recorder.last().endpoint, "live_chat/messages/abc?hours=2.5");
    }

    #[tokio::test]
    async fn test_send_text_reply() {
        let (client, recorder) = test_support::client();
        recorder.reply(200, json!({"success": true}));

        let message = OutgoingMessage::text("abc", "hello").replying_to("m1");
        let result = send(&client, &message).await.into_data().unwrap();

        assert!(result.success);
        assert_eq!(
            recorder.last().body,
            RequestBody::Json(json!({
                "stream_id": "abc",
                "content": "hello",
                "message_type": "text",
                "reply_to_id": "m1"
            }))
        );
    }
}
