//! URL helpers for the live chat channel.
//!
//! The realtime socket cannot carry custom headers, so the API key travels
//! as a `token` query parameter instead of `X-API-Key`.

use crate::models::ServerInfo;
use crate::services::endpoints::{live_chat, PLUGIN_BASE_PATH};

/// WebSocket URL of the realtime channel for the given backend.
pub fn websocket_url(server: &ServerInfo, token: &str) -> String {
    format!(
        "ws://{}:{}{}/{}?token={}",
        server.host,
        server.port,
        PLUGIN_BASE_PATH,
        live_chat::REALTIME,
        urlencoding::encode(token)
    )
}

/// Replace the token value in a realtime URL so it can be logged.
pub fn mask_websocket_url(url: &str) -> String {
    let Some(start) = url.find("token=").map(|i| i + "token=".len()) else {
        return url.to_string();
    };
    let end = url[start..]
        .find('&')
        .map(|i| start + i)
        .unwrap_or(url.len());

    format!("{}***{}", &url[..start], &url[end..])
}

/// Relative URL of a chat image, or an empty string when there is no hash.
pub fn image_url(hash: Option<&str>) -> String {
    asset_url(live_chat::IMAGE, hash)
}

/// Relative URL of a chat emoji, or an empty string when there is no hash.
pub fn emoji_url(hash: Option<&str>) -> String {
    asset_url(live_chat::EMOJI, hash)
}

fn asset_url(prefix: &str, hash: Option<&str>) -> String {
    match hash.filter(|h| !h.is_empty()) {
        Some(hash) => format!(
            "{}/{}/{}",
            PLUGIN_BASE_PATH,
            prefix,
            urlencoding::encode(hash)
        ),
        None => String::new(),
    }
}
