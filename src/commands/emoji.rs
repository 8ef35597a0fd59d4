//! Emoji asset management.
//!
//! The emoji routes wrap their payloads in a `{success, data}` [`Envelope`];
//! per-item failures of uploads and batch actions are reported inside a 2xx
//! response and are left for the caller to inspect.

use crate::error::AppError;
use crate::models::emoji::{BatchResult, EmojiStats, EmojiUpdate, UploadResult};
use crate::models::{ApiResponse, EmojiBatchAction, EmojiDetail, EmojiList, EmojiListQuery, Envelope};
use crate::services::api_client::ApiClient;
use crate::services::endpoints::emoji;
use crate::services::request::{image_mime, MultipartBody, QueryParams, RequestBody};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde_json::json;

/// Form field the upload route reads files from.
const UPLOAD_FIELD: &str = "files";

/// Image file to upload.
#[derive(Debug, Clone, PartialEq)]
pub struct EmojiFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl EmojiFile {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }

    fn mime(&self) -> Option<&'static str> {
        image_mime(&self.file_name)
    }
}

pub async fn list(client: &ApiClient, query: &EmojiListQuery) -> ApiResponse<Envelope<EmojiList>> {
    client.get_query(emoji::LIST, query).await
}

pub async fn detail(client: &ApiClient, hash: &str) -> ApiResponse<Envelope<EmojiDetail>> {
    client.get(&emoji::detail(hash), &QueryParams::new()).await
}

/// Upload one or more images as a multipart form.
pub async fn upload(client: &ApiClient, files: Vec<EmojiFile>) -> ApiResponse<Envelope<UploadResult>> {
    let body = files.into_iter().fold(MultipartBody::new(), |body, file| {
        match file.mime() {
            Some(mime) => body.file_with_mime(UPLOAD_FIELD, file.file_name, file.bytes, mime),
            None => body.file(UPLOAD_FIELD, file.file_name, file.bytes),
        }
    });
    client.post_multipart(emoji::UPLOAD, body).await
}

pub async fn delete(client: &ApiClient, hash: &str) -> ApiResponse<Envelope<serde_json::Value>> {
    client.delete(&emoji::detail(hash)).await
}

/// Partially update description, emotions or ban state.
pub async fn update(
    client: &ApiClient,
    hash: &str,
    changes: &EmojiUpdate,
) -> ApiResponse<Envelope<EmojiDetail>> {
    client.patch_json(&emoji::detail(hash), changes).await
}

pub async fn batch(
    client: &ApiClient,
    action: EmojiBatchAction,
    hashes: &[String],
) -> ApiResponse<Envelope<BatchResult>> {
    client
        .post(
            emoji::BATCH,
            RequestBody::Json(json!({ "action": action, "emoji_hashes": hashes })),
        )
        .await
}

pub async fn stats(client: &ApiClient) -> ApiResponse<Envelope<EmojiStats>> {
    client.get(emoji::STATS, &QueryParams::new()).await
}

/// Decode a base64 thumbnail or full image, with or without a `data:` URL prefix.
pub fn decode_image(encoded: &str) -> Result<Vec<u8>, AppError> {
    let payload = match encoded.split_once(',') {
        Some((prefix, data)) if prefix.starts_with("data:") => data,
        _ => encoded,
    };

    STANDARD
        .decode(payload.trim())
        .map_err(|e| AppError::invalid_input_field(format!("Invalid base64 image: {}", e), "image"))
}
