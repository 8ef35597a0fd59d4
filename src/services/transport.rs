//! Transports the API client sends prepared requests through.
//!
//! A transport only moves bytes: it returns the status and the body text, or
//! an error when no response was received. Outcome normalization lives in the
//! client so every transport is judged by the same rules.

use crate::error::AppError;
use crate::services::discovery::DiscoveryClient;
use crate::services::request::{ApiRequest, RawResponse, RequestBody};
use async_trait::async_trait;
use reqwest::header::{HeaderValue, CONTENT_TYPE};
use reqwest::Client;
use std::time::Duration;

/// Header carrying the API key (`X-API-Key`).
pub const API_KEY_HEADER: &str = "x-api-key";

/// Sends an [`ApiRequest`] and returns the raw response.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, AppError>;
}

/// Where live requests are sent.
#[derive(Debug, Clone)]
pub enum Origin {
    /// A fixed base URL such as `http://127.0.0.1:8000`.
    Fixed(String),

    /// Resolved through the discovery service, cached after the first lookup.
    Discovered(DiscoveryClient),
}

impl Origin {
    pub async fn resolve(&self) -> Result<String, AppError> {
        match self {
            Self::Fixed(base_url) => Ok(base_url.trim_end_matches('/').to_string()),
            Self::Discovered(discovery) => Ok(discovery.server_info().await?.http_origin()),
        }
    }
}

/// Live HTTP transport backed by reqwest.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    origin: Origin,
    base_path: String,
}

impl HttpTransport {
    /// Create a transport. `timeout_secs = None` keeps reqwest's defaults.
    pub fn new(
        origin: Origin,
        base_path: impl Into<String>,
        timeout_secs: Option<u64>,
        user_agent: &str,
    ) -> Result<Self, AppError> {
        let mut builder = Client::builder().user_agent(user_agent);
        if let Some(secs) = timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| AppError::internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            origin,
            base_path: normalize_base_path(&base_path.into()),
        })
    }

    pub fn origin(&self) -> &Origin {
        &self.origin
    }

    /// Full URL for an endpoint under the given origin.
    fn api_url(&self, origin: &str, endpoint: &str) -> String {
        format!("{}{}/{}", origin, self.base_path, endpoint)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, AppError> {
        let origin = self.origin.resolve().await?;
        let url = self.api_url(&origin, &request.endpoint);

        let mut headers = request.headers;
        if let Some(token) = request.credential.as_deref() {
            let value = HeaderValue::from_str(token)
                .map_err(|_| AppError::authentication("Invalid API key format"))?;
            headers.insert(API_KEY_HEADER, value);
        }

        let mut builder = self.client.request(request.method, &url);
        builder = match request.body {
            RequestBody::Empty => builder.headers(headers),
            RequestBody::Json(value) => {
                if !headers.contains_key(CONTENT_TYPE) {
                    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
                }
                builder.headers(headers).body(serde_json::to_vec(&value)?)
            }
            RequestBody::Multipart(body) => {
                // reqwest sets the multipart boundary header itself.
                headers.remove(CONTENT_TYPE);
                builder.headers(headers).multipart(body.into_form()?)
            }
        };

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = match response.text().await {
            Ok(text) => text,
            Err(e) => {
                log::warn!("[api] Failed to read response body from {}: {}", url, e);
                String::new()
            }
        };

        Ok(RawResponse { status, body })
    }
}

/// Ensure the prefix starts with `/` and has no trailing slash.
fn normalize_base_path(path: &str) -> String {
    let trimmed = path.trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{}", trimmed)
    }
}
