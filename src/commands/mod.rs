//! Typed dashboard operations.
//!
//! Thin async wrappers over [`ApiClient`](crate::services::ApiClient), one
//! module per feature area:
//! - `auth`: login, logout, key verification, health
//! - `initialization`: first-run setup wizard
//! - `stats`: dashboard overview, schedules, usage series, system control
//! - `plugins`, `marketplace`: plugin lifecycle, components and installs
//! - `config`, `plugin_config`: configuration files, backups and validation
//! - `git_update` / `ui_update` / `git_env`: self-update and the git it needs
//! - `log_viewer`, `live_chat`, `setting`: logs, chat and appearance
//! - `emoji`, `expression`, `relationship`, `model_stats`: data screens
//!
//! Every operation returns an [`ApiResponse`](crate::models::ApiResponse);
//! none of them return early with an error.

pub mod auth;
pub mod config;
pub mod emoji;
pub mod expression;
pub mod git_env;
pub mod git_update;
pub mod initialization;
pub mod live_chat;
pub mod log_viewer;
pub mod marketplace;
pub mod model_stats;
pub mod plugin_config;
pub mod plugins;
pub mod relationship;
pub mod setting;
pub mod stats;
pub mod ui_update;
