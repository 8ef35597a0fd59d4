//! WebUI wallpaper.

use crate::models::setting::WallpaperResult;
use crate::models::{ActionResult, ApiResponse};
use crate::services::api_client::ApiClient;
use crate::services::endpoints::{setting, PLUGIN_BASE_PATH};
use crate::services::request::{image_mime, MultipartBody};

const UPLOAD_FIELD: &str = "file";

/// Replace the wallpaper. The backend only accepts `image/*` parts, so a
/// file without a known image extension is sent as PNG.
pub async fn upload_wallpaper(
    client: &ApiClient,
    file_name: &str,
    bytes: Vec<u8>,
) -> ApiResponse<WallpaperResult> {
    let mime = image_mime(file_name).unwrap_or("image/png");
    let body = MultipartBody::new().file_with_mime(UPLOAD_FIELD, file_name, bytes, mime);
    client.post_multipart(setting::WALLPAPER, body).await
}

pub async fn delete_wallpaper(client: &ApiClient) -> ApiResponse<ActionResult> {
    client.delete(setting::WALLPAPER).await
}

/// Relative URL of the current wallpaper image.
pub fn wallpaper_url() -> String {
    format!("{}/{}", PLUGIN_BASE_PATH, setting::WALLPAPER_IMAGE)
}
