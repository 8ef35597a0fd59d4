//! MoFox WebUI API client.
//!
//! Turns an endpoint, an optional body and optional query parameters into an
//! [`ApiResponse`]. Every call is attempted exactly once and never returns an
//! error: transport failures become `status: 0` outcomes and non-2xx replies
//! become failure outcomes carrying the server's `error` field when present.

use crate::error::AppError;
use crate::models::ApiResponse;
use crate::services::credentials::{KeyValueStore, TOKEN_KEY};
use crate::services::demo::{DemoTransport, DEFAULT_DEMO_LATENCY_MS};
use crate::services::discovery::{DiscoveryClient, DEFAULT_DISCOVERY_URL};
use crate::services::endpoints::PLUGIN_BASE_PATH;
use crate::services::request::{
    clean_endpoint, ApiRequest, MultipartBody, QueryParams, RawResponse, RequestBody,
};
use crate::services::transport::{HttpTransport, Origin, Transport};
use reqwest::header::HeaderMap;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;

/// Default address of the main backend HTTP server.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Whether requests go to the backend or to the demo fixtures.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClientMode {
    #[default]
    Live,
    Demo,
}

/// How the backend origin is found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OriginConfig {
    Fixed { base_url: String },
    Discovery { url: String },
}

impl Default for OriginConfig {
    fn default() -> Self {
        Self::Fixed {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl OriginConfig {
    pub fn discovery_default() -> Self {
        Self::Discovery {
            url: DEFAULT_DISCOVERY_URL.to_string(),
        }
    }
}

/// API client configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub mode: ClientMode,

    pub origin: OriginConfig,

    /// Prefix every endpoint is mounted under.
    pub plugin_base_path: String,

    /// Request timeout in seconds; `None` keeps the transport default.
    pub timeout_secs: Option<u64>,

    /// Simulated latency in demo mode.
    pub demo_latency_ms: u64,

    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            mode: ClientMode::Live,
            origin: OriginConfig::default(),
            plugin_base_path: PLUGIN_BASE_PATH.to_string(),
            timeout_secs: None,
            demo_latency_ms: DEFAULT_DEMO_LATENCY_MS,
            user_agent: concat!("mofox-webui/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ClientConfig {
    pub fn demo() -> Self {
        Self {
            mode: ClientMode::Demo,
            ..Default::default()
        }
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            origin: OriginConfig::Fixed {
                base_url: base_url.into(),
            },
            ..Default::default()
        }
    }
}

/// Stateful API client holding the current API key.
pub struct ApiClient {
    config: ClientConfig,
    transport: Arc<dyn Transport>,
    store: Arc<dyn KeyValueStore>,
    token: RwLock<Option<String>>,
    discovery: Option<DiscoveryClient>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("config", &self.config)
            .field("has_token", &self.has_token())
            .finish()
    }
}

impl ApiClient {
    /// Create a client, picking the transport from `config.mode` and loading
    /// any persisted API key from `store`.
    pub fn new(config: ClientConfig, store: Arc<dyn KeyValueStore>) -> Result<Self, AppError> {
        let mut discovery = None;
        let transport: Arc<dyn Transport> = match config.mode {
            ClientMode::Demo => Arc::new(DemoTransport::new(Duration::from_millis(
                config.demo_latency_ms,
            ))),
            ClientMode::Live => {
                let origin = match &config.origin {
                    OriginConfig::Fixed { base_url } => Origin::Fixed(base_url.clone()),
                    OriginConfig::Discovery { url } => {
                        let client = DiscoveryClient::new(url.clone())?;
                        discovery = Some(client.clone());
                        Origin::Discovered(client)
                    }
                };
                Arc::new(HttpTransport::new(
                    origin,
                    config.plugin_base_path.clone(),
                    config.timeout_secs,
                    &config.user_agent,
                )?)
            }
        };

        let mut client = Self::with_transport(config, store, transport);
        client.discovery = discovery;
        Ok(client)
    }

    /// Create a client over a custom transport.
    pub fn with_transport(
        config: ClientConfig,
        store: Arc<dyn KeyValueStore>,
        transport: Arc<dyn Transport>,
    ) -> Self {
        let token = match store.get(TOKEN_KEY) {
            Ok(token) => token.filter(|t| !t.is_empty()),
            Err(e) => {
                log::warn!("[api] Failed to load stored API key: {}", e);
                None
            }
        };

        Self {
            config,
            transport,
            store,
            token: RwLock::new(token),
            discovery: None,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn is_demo(&self) -> bool {
        self.config.mode == ClientMode::Demo
    }

    /// Discovery client, when the origin is discovered rather than fixed.
    pub fn discovery(&self) -> Option<&DiscoveryClient> {
        self.discovery.as_ref()
    }

    /// Set or clear the API key. The in-memory value always changes; the
    /// returned error only reports a failed write to the persistent store.
    pub fn set_token(&self, token: Option<&str>) -> Result<(), AppError> {
        let token = token.filter(|t| !t.is_empty());
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = token.map(str::to_string);

        match token {
            Some(token) => self.store.set(TOKEN_KEY, token),
            None => self.store.remove(TOKEN_KEY),
        }
    }

    /// Current API key. Never performs I/O.
    pub fn token(&self) -> Option<String> {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn has_token(&self) -> bool {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Core request primitive every verb helper goes through.
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        body: RequestBody,
        headers: HeaderMap,
    ) -> ApiResponse<T> {
        let endpoint = clean_endpoint(endpoint).to_string();
        log::debug!("[api] {} {}", method, endpoint);

        let request = ApiRequest {
            method: method.clone(),
            endpoint: endpoint.clone(),
            body,
            headers,
            credential: self.token(),
        };

        match self.transport.send(request).await {
            Ok(raw) => {
                log::debug!("[api] {} {} -> {}", method, endpoint, raw.status);
                normalize(raw)
            }
            Err(e) => {
                log::error!("[api] {} {} failed: {}", method, endpoint, e);
                ApiResponse::network_failure(e.detail())
            }
        }
    }

    /// GET with optional query parameters.
    pub async fn get<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &QueryParams,
    ) -> ApiResponse<T> {
        let endpoint = params.append_to(endpoint);
        self.request(Method::GET, &endpoint, RequestBody::Empty, HeaderMap::new())
            .await
    }

    /// GET with query parameters taken from a serializable struct.
    pub async fn get_query<T: DeserializeOwned, Q: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        query: &Q,
    ) -> ApiResponse<T> {
        match QueryParams::from_serialize(query) {
            Ok(params) => self.get(endpoint, &params).await,
            Err(e) => unserializable(endpoint, e),
        }
    }

    /// POST with a body.
    pub async fn post<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: RequestBody,
    ) -> ApiResponse<T> {
        self.request(Method::POST, endpoint, body, HeaderMap::new())
            .await
    }

    /// POST a serializable value as JSON.
    pub async fn post_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> ApiResponse<T> {
        match RequestBody::json(body) {
            Ok(body) => self.post(endpoint, body).await,
            Err(e) => unserializable(endpoint, e),
        }
    }

    /// POST a multipart form (file uploads).
    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: MultipartBody,
    ) -> ApiResponse<T> {
        self.post(endpoint, RequestBody::Multipart(body)).await
    }

    /// PUT (full replace).
    pub async fn put<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: RequestBody,
    ) -> ApiResponse<T> {
        self.request(Method::PUT, endpoint, body, HeaderMap::new())
            .await
    }

    pub async fn put_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> ApiResponse<T> {
        match RequestBody::json(body) {
            Ok(body) => self.put(endpoint, body).await,
            Err(e) => unserializable(endpoint, e),
        }
    }

    /// PATCH (partial update).
    pub async fn patch<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: RequestBody,
    ) -> ApiResponse<T> {
        self.request(Method::PATCH, endpoint, body, HeaderMap::new())
            .await
    }

    pub async fn patch_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> ApiResponse<T> {
        match RequestBody::json(body) {
            Ok(body) => self.patch(endpoint, body).await,
            Err(e) => unserializable(endpoint, e),
        }
    }

    /// DELETE, never with a body.
    pub async fn delete<T: DeserializeOwned>(&self, endpoint: &str) -> ApiResponse<T> {
        self.request(Method::DELETE, endpoint, RequestBody::Empty, HeaderMap::new())
            .await
    }
}

/// Fold a raw response into an outcome.
///
/// The body is parsed once as JSON. A body that fails to parse leaves the
/// payload empty but never turns a 2xx into a failure.
fn normalize<T: DeserializeOwned>(raw: RawResponse) -> ApiResponse<T> {
    let parsed: Option<Value> = if raw.body.trim().is_empty() {
        None
    } else {
        serde_json::from_str(&raw.body).ok()
    };

    if (200..300).contains(&raw.status) {
        let data = parsed.and_then(|value| match serde_json::from_value::<T>(value) {
            Ok(data) => Some(data),
            Err(e) => {
                log::debug!("[api] Response payload did not match the expected type: {}", e);
                None
            }
        });
        return ApiResponse::ok(data, raw.status);
    }

    if raw.status == 0 {
        // A zero status is reserved for transport failures.
        return ApiResponse::network_failure(String::new());
    }

    let error = parsed
        .as_ref()
        .and_then(|value| value.get("error"))
        .and_then(Value::as_str)
        .filter(|message| !message.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| format!("Request failed: {}", raw.status));

    ApiResponse::http_failure(raw.status, error)
}

fn unserializable<T>(endpoint: &str, err: AppError) -> ApiResponse<T> {
    log::error!("[api] Could not serialize request for {}: {}", endpoint, err);
    ApiResponse::network_failure(err.detail())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::credentials::MemoryStore;
    use crate::services::demo::DEMO_API_KEY;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Transport that records requests and replays a canned result.
    struct RecordingTransport {
        reply: Mutex<Option<Result<RawResponse, AppError>>>,
        seen: Mutex<Vec<ApiRequest>>,
    }

    impl RecordingTransport {
        fn replying(reply: Result<RawResponse, AppError>) -> Arc<Self> {
            Arc::new(Self {
                reply: Mutex::new(Some(reply)),
                seen: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl Transport for RecordingTransport {
        async fn send(&self, request: ApiRequest) -> Result<RawResponse, AppError> {
            self.seen.lock().unwrap().push(request);
            self.reply
                .lock()
                .unwrap()
                .take()
                .unwrap_or_else(|| Ok(RawResponse::new(200, "")))
        }
    }

    fn client_with(transport: Arc<RecordingTransport>) -> ApiClient {
        ApiClient::with_transport(
            ClientConfig::default(),
            Arc::new(MemoryStore::new()),
            transport,
        )
    }

    #[test]
    fn test_normalize_success_with_payload() {
        let outcome: ApiResponse<Value> = normalize(RawResponse::new(200, r#"{"a":1}"#));
        assert!(outcome.is_success());
        assert_eq!(outcome.data(), Some(&serde_json::json!({"a": 1})));
    }

    #[test]
    fn test_normalize_success_with_unparsable_body() {
        let outcome: ApiResponse<Value> = normalize(RawResponse::new(200, "<html>"));
        assert!(outcome.is_success());
        assert_eq!(outcome.status(), 200);
        assert!(outcome.data().is_none());
    }

    #[test]
    fn test_normalize_failure_prefers_server_error() {
        let outcome: ApiResponse<Value> =
            normalize(RawResponse::new(401, r#"{"error":"missing key"}"#));
        assert!(!outcome.is_success());
        assert_eq!(outcome.status(), 401);
        assert_eq!(outcome.error(), Some("missing key"));
    }

    #[test]
    fn test_normalize_failure_generic_message() {
        let outcome: ApiResponse<Value> = normalize(RawResponse::new(502, "Bad Gateway"));
        assert_eq!(outcome.error(), Some("Request failed: 502"));
        assert!(outcome.data().is_none());
    }

    #[tokio::test]
    async fn test_transport_error_becomes_status_zero() {
        let transport = RecordingTransport::replying(Err(AppError::network("connection refused")));
        let client = client_with(transport);

        let outcome: ApiResponse<Value> = client.get("stats/overview", &QueryParams::new()).await;
        assert!(outcome.is_network_failure());
        assert_eq!(outcome.error(), Some("connection refused"));
    }

    #[tokio::test]
    async fn test_get_appends_query_and_cleans_endpoint() {
        let transport = RecordingTransport::replying(Ok(RawResponse::new(200, "{}")));
        let client = client_with(transport.clone());

        let params = QueryParams::new()
            .with("a", 1)
            .with_opt::<u32>("b", None)
            .with("c", "x");
        let _: ApiResponse<Value> = client.get("/emoji/list", &params).await;

        let seen = transport.seen.lock().unwrap();
        assert_eq!(seen[0].endpoint, "emoji/list?a=1&c=x");
        assert_eq!(seen[0].method, Method::GET);
    }

    #[tokio::test]
    async fn test_credential_attached_and_cleared() {
        let transport = RecordingTransport::replying(Ok(RawResponse::new(200, "{}")));
        let client = client_with(transport.clone());

        client.set_token(Some("key-1")).unwrap();
        let _: ApiResponse<Value> = client.delete("emoji/abc").await;
        client.set_token(None).unwrap();
        let _: ApiResponse<Value> = client.delete("emoji/abc").await;

        let seen = transport.seen.lock().unwrap();
        assert_eq!(seen[0].credential.as_deref(), Some("key-1"));
        assert_eq!(seen[1].credential, None);
        assert_eq!(seen[1].body, RequestBody::Empty);
    }

    #[test]
    fn test_token_round_trip_persists() {
        let store = Arc::new(MemoryStore::new());
        let client = ApiClient::new(ClientConfig::demo(), store.clone()).unwrap();

        client.set_token(Some("abc")).unwrap();
        assert_eq!(client.token().as_deref(), Some("abc"));
        assert_eq!(store.get(TOKEN_KEY).unwrap().as_deref(), Some("abc"));

        client.set_token(Some("")).unwrap();
        assert_eq!(client.token(), None);
        assert_eq!(store.get(TOKEN_KEY).unwrap(), None);
    }

    #[test]
    fn test_token_loaded_from_store() {
        let store = Arc::new(MemoryStore::with_token("persisted"));
        let client = ApiClient::new(ClientConfig::demo(), store).unwrap();
        assert_eq!(client.token().as_deref(), Some("persisted"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_demo_login_checks_key() {
        let client = ApiClient::new(ClientConfig::demo(), Arc::new(MemoryStore::new())).unwrap();

        client.set_token(Some("nope")).unwrap();
        let denied: ApiResponse<Value> = client.post("auth/login", RequestBody::Empty).await;
        assert_eq!(denied.status(), 401);
        assert!(!denied.is_success());

        client.set_token(Some(DEMO_API_KEY)).unwrap();
        let granted: ApiResponse<Value> = client.post("auth/login", RequestBody::Empty).await;
        assert_eq!(granted.status(), 200);
        assert!(granted.is_success());
    }

    #[test]
    fn test_config_deserializes_with_defaults() {
        let config: ClientConfig = serde_json::from_str(r#"{"mode": "demo"}"#).unwrap();
        assert_eq!(config.mode, ClientMode::Demo);
        assert_eq!(config.plugin_base_path, PLUGIN_BASE_PATH);
        assert_eq!(config.origin, OriginConfig::default());
    }
}
