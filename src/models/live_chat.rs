//! Live chat models.

use serde::{Deserialize, Serialize};

/// Active conversation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatStream {
    pub stream_id: String,
    pub platform: Option<String>,
    pub user_id: Option<String>,
    pub user_nickname: Option<String>,
    pub group_id: Option<String>,
    pub group_name: Option<String>,
    /// Unix seconds.
    pub last_active_time: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StreamList {
    pub success: bool,
    pub streams: Vec<ChatStream>,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatMessage {
    pub message_id: Option<String>,
    pub stream_id: Option<String>,
    pub user_id: Option<String>,
    pub user_nickname: Option<String>,
    pub content: Option<String>,
    pub timestamp: Option<f64>,
    pub is_emoji: bool,
    pub is_picid: bool,
    pub reply_to_id: Option<String>,
    /// `incoming` or `outgoing`.
    pub direction: String,
    /// `user` or `bot`.
    pub sender_type: String,
}

impl Default for ChatMessage {
    fn default() -> Self {
        Self {
            message_id: None,
            stream_id: None,
            user_id: None,
            user_nickname: None,
            content: None,
            timestamp: None,
            is_emoji: false,
            is_picid: false,
            reply_to_id: None,
            direction: "incoming".to_string(),
            sender_type: "user".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageList {
    pub success: bool,
    pub messages: Vec<ChatMessage>,
    pub count: u32,
}

/// The message another one quotes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplyLookup {
    pub success: bool,
    pub message: Option<ChatMessage>,
    pub error: Option<String>,
}

/// Outgoing message.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutgoingMessage {
    pub stream_id: String,
    pub content: String,
    /// `text`, `image` or `emoji`.
    pub message_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_base64: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to_id: Option<String>,
}

impl OutgoingMessage {
    pub fn text(stream_id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            stream_id: stream_id.into(),
            content: content.into(),
            message_type: "text".to_string(),
            image_base64: None,
            reply_to_id: None,
        }
    }

    pub fn replying_to(mut self, message_id: impl Into<String>) -> Self {
        self.reply_to_id = Some(message_id.into());
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SendResult {
    pub success: bool,
    pub error: Option<String>,
}
