//! WebUI appearance settings.

use serde::{Deserialize, Serialize};

/// Reply to a wallpaper upload. `url` carries a cache-busting query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WallpaperResult {
    pub success: bool,
    pub url: String,
    pub message: Option<String>,
}
