//! Data models for the application.
//!
//! These models mirror the JSON payloads of the MoFox WebUI backend. Response
//! models use `#[serde(default)]` so a partially filled payload still decodes.

pub mod api_response;
pub mod emoji;
pub mod expression;
pub mod initialization;
pub mod live_chat;
pub mod log_viewer;
pub mod marketplace;
pub mod model_stats;
pub mod plugin;
pub mod plugin_config;
pub mod server_info;
pub mod setting;
pub mod stats;
pub mod update;

// Re-exports for convenient access
pub use api_response::ApiResponse;
pub use emoji::{EmojiBatchAction, EmojiDetail, EmojiList, EmojiListQuery, Envelope};
pub use expression::{Expression, ExpressionInput, ExpressionList, ExpressionType, PersonList};
pub use initialization::{BotConfig, InitStatus, ModelConfig};
pub use live_chat::{ChatMessage, ChatStream, OutgoingMessage};
pub use log_viewer::{LogEntry, LogSearchQuery, LogSearchResult};
pub use model_stats::TimeRange;
pub use plugin::{ConfigFile, PluginDetail};
pub use server_info::ServerInfo;
pub use stats::{ActionResult, DashboardOverview};
pub use update::{UpdateCheck, UpdateResult};
