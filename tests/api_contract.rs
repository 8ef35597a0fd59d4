//! HTTP contract tests for the live API client.
//!
//! A wiremock backend stands in for the MoFox WebUI plugin. These tests pin
//! down URL construction, the `X-API-Key` header, body encoding and how each
//! kind of reply is folded into an `ApiResponse`.

use mofox_webui_lib::commands;
use mofox_webui_lib::commands::emoji::EmojiFile;
use mofox_webui_lib::models::{ApiResponse, LogSearchQuery};
use mofox_webui_lib::services::api_client::{ApiClient, ClientConfig, OriginConfig};
use mofox_webui_lib::services::credentials::MemoryStore;
use mofox_webui_lib::services::request::{QueryParams, RequestBody};
use serde_json::{json, Value};
use std::sync::Arc;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PREFIX: &str = "/plugins/webui_backend";

fn live_client(base_url: &str) -> ApiClient {
    ApiClient::new(
        ClientConfig::with_base_url(base_url),
        Arc::new(MemoryStore::new()),
    )
    .unwrap()
}

// ────────────────────────────────────────────────────────────────────────────
// Outcome normalization
// ────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_unauthenticated_login_reports_server_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("{}/auth/login", PREFIX)))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"error": "missing key"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = live_client(&server.uri());
    let outcome: ApiResponse<Value> = client.get("auth/login", &QueryParams::new()).await;

    assert!(!outcome.is_success());
    assert_eq!(outcome.status(), 401);
    assert_eq!(outcome.error(), Some("missing key"));
    assert!(outcome.data().is_none());

    let requests = server.received_requests().await.unwrap();
    assert!(!requests[0].headers.contains_key("x-api-key"));
}

#[tokio::test]
async fn test_failure_without_error_field_is_generic() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("{}/stats/overview", PREFIX)))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&server)
        .await;

    let client = live_client(&server.uri());
    let outcome: ApiResponse<Value> = client.get("stats/overview", &QueryParams::new()).await;

    assert_eq!(outcome.status(), 500);
    assert_eq!(outcome.error(), Some("Request failed: 500"));
}

#[tokio::test]
async fn test_malformed_success_body_is_still_success() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("{}/stats/overview", PREFIX)))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not json"))
        .mount(&server)
        .await;

    let client = live_client(&server.uri());
    let outcome: ApiResponse<Value> = client.get("stats/overview", &QueryParams::new()).await;

    assert!(outcome.is_success());
    assert_eq!(outcome.status(), 200);
    assert!(outcome.data().is_none());
    assert!(outcome.error().is_none());
}

#[tokio::test]
async fn test_empty_success_body() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path(format!("{}/emoji/abc", PREFIX)))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let client = live_client(&server.uri());
    let outcome: ApiResponse<Value> = client.delete("emoji/abc").await;

    assert!(outcome.is_success());
    assert_eq!(outcome.status(), 204);
    assert!(outcome.data().is_none());
}

#[tokio::test]
async fn test_connection_refused_is_status_zero() {
    // Nothing listens on the discard port.
    let client = live_client("http://127.0.0.1:9");
    let outcome: ApiResponse<Value> = client.get("stats/overview", &QueryParams::new()).await;

    assert!(!outcome.is_success());
    assert_eq!(outcome.status(), 0);
    assert!(!outcome.error_message().is_empty());
}

// ────────────────────────────────────────────────────────────────────────────
// Request format
// ────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_credential_header_attached_until_cleared() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("{}/auth/login", PREFIX)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .mount(&server)
        .await;

    let client = live_client(&server.uri());
    client.set_token(Some("key-123")).unwrap();
    commands::auth::verify(&client).await;
    client.set_token(None).unwrap();
    commands::auth::verify(&client).await;

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].headers["x-api-key"], "key-123");
    assert!(!requests[1].headers.contains_key("x-api-key"));
}

#[tokio::test]
async fn test_login_is_a_get_with_the_key_header() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("{}/auth/login", PREFIX)))
        .and(header("x-api-key", "good-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "mmc": "verified"
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path(format!("{}/auth/login", PREFIX)))
        .respond_with(
            ResponseTemplate::new(405).set_body_json(json!({"detail": "Method Not Allowed"})),
        )
        .expect(0)
        .mount(&server)
        .await;

    let client = live_client(&server.uri());
    let outcome = commands::auth::login(&client, "good-key").await;

    assert!(outcome.is_success());
    assert_eq!(outcome.status(), 200);
    assert_eq!(client.token().as_deref(), Some("good-key"));

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method.as_str(), "GET");
}

#[tokio::test]
async fn test_health_needs_no_key() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("{}/auth/health", PREFIX)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "healthy",
            "service": "MoFox-Bot WebUI Auth API"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = live_client(&server.uri());
    let health = commands::auth::health(&client).await.into_data().unwrap();

    assert_eq!(health.status, "healthy");
}

#[tokio::test]
async fn test_json_body_and_content_type() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(format!("{}/git_update/switch-branch", PREFIX)))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"branch": "dev"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "message": "switched",
            "current_branch": "dev"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = live_client(&server.uri());
    let outcome = commands::git_update::switch_branch(&client, "dev").await;

    assert!(outcome.is_success());
    assert_eq!(
        outcome.into_data().unwrap().current_branch.as_deref(),
        Some("dev")
    );
}

#[tokio::test]
async fn test_query_string_skips_missing_values() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("{}/emoji/list", PREFIX)))
        .and(query_param("a", "1"))
        .and(query_param("c", "x"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let client = live_client(&server.uri());
    let params = QueryParams::new()
        .with("a", 1)
        .with_opt("b", None::<String>)
        .with("c", "x");
    let _: ApiResponse<Value> = client.get("emoji/list", &params).await;

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), Some("a=1&c=x"));
}

#[tokio::test]
async fn test_multipart_upload_sets_its_own_boundary() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(format!("{}/emoji/upload", PREFIX)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {"uploaded": 1, "failed": 0, "results": [{"filename": "cat.png", "success": true}]}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = live_client(&server.uri());
    let outcome =
        commands::emoji::upload(&client, vec![EmojiFile::new("cat.png", b"PNGDATA".to_vec())])
            .await;

    let envelope = outcome.into_data().unwrap();
    assert!(envelope.success);
    assert_eq!(envelope.data.unwrap().uploaded, 1);

    let requests = server.received_requests().await.unwrap();
    let content_type = requests[0].headers["content-type"].to_str().unwrap();
    assert!(content_type.starts_with("multipart/form-data; boundary="));
    let body = String::from_utf8_lossy(&requests[0].body);
    assert!(body.contains("name=\"files\""));
    assert!(body.contains("filename=\"cat.png\""));
    assert!(body.contains("PNGDATA"));
}

#[tokio::test]
async fn test_leading_slash_is_stripped() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path(format!("{}/expression/7", PREFIX)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .expect(1)
        .mount(&server)
        .await;

    let client = live_client(&server.uri());
    let outcome: ApiResponse<Value> = client
        .put("/expression/7", RequestBody::Json(json!({"style": "x"})))
        .await;

    assert!(outcome.is_success());
}

#[tokio::test]
async fn test_config_path_with_reserved_characters_stays_in_path() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("{}/config/content/plugins/my%20plugin/a%23b.toml", PREFIX)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "path": "plugins/my plugin/a#b.toml",
            "content": "x = 1"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = live_client(&server.uri());
    let outcome = commands::config::content(&client, "plugins/my plugin/a#b.toml").await;

    assert!(outcome.is_success());
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), None);
    assert_eq!(requests[0].url.fragment(), None);
}

#[tokio::test]
async fn test_log_search_sends_filters_as_query() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("{}/log_viewer/search", PREFIX)))
        .and(query_param("filename", "app.log"))
        .and(query_param("query", "timeout"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "entries": [{
                "timestamp": "2025-12-20 14:30:10",
                "level": "WARNING",
                "logger_name": "network",
                "event": "request timeout",
                "line_number": 3,
                "file_name": "app.log"
            }],
            "total": 1,
            "offset": 0,
            "limit": 100
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = live_client(&server.uri());
    let query = LogSearchQuery {
        query: Some("timeout".to_string()),
        ..LogSearchQuery::new("app.log")
    };
    let result = commands::log_viewer::search(&client, &query)
        .await
        .into_data()
        .unwrap();

    assert_eq!(result.total, 1);
    assert_eq!(result.entries[0].logger_name, "network");
}

#[tokio::test]
async fn test_plugin_config_validate_reports_parse_position() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(format!("{}/plugin_config/weather/validate", PREFIX)))
        .and(query_param("content", "a = "))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "valid": false,
            "message": "invalid TOML",
            "line": 1,
            "col": 5
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = live_client(&server.uri());
    let validation = commands::plugin_config::validate(&client, "weather", "a = ")
        .await
        .into_data()
        .unwrap();

    assert!(validation.success);
    assert!(!validation.valid);
    assert_eq!((validation.line, validation.col), (Some(1), Some(5)));
}

// ────────────────────────────────────────────────────────────────────────────
// Origin discovery
// ────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_discovered_origin_is_resolved_once() {
    let backend = MockServer::start().await;
    let discovery = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/server-info"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "host": "127.0.0.1",
            "port": backend.address().port()
        })))
        .expect(1)
        .mount(&discovery)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("{}/stats/system", PREFIX)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"cpu_percent": 3.0})))
        .expect(2)
        .mount(&backend)
        .await;

    let config = ClientConfig {
        origin: OriginConfig::Discovery {
            url: discovery.uri(),
        },
        ..Default::default()
    };
    let client = ApiClient::new(config, Arc::new(MemoryStore::new())).unwrap();

    let first = commands::stats::system(&client).await;
    let second = commands::stats::system(&client).await;

    assert!(first.is_success());
    assert_eq!(second.into_data().unwrap().cpu_percent, 3.0);
    assert!(client.discovery().unwrap().cached().await.is_some());
}

#[tokio::test]
async fn test_discovery_failure_is_status_zero() {
    let config = ClientConfig {
        origin: OriginConfig::Discovery {
            url: "http://127.0.0.1:9".to_string(),
        },
        ..Default::default()
    };
    let client = ApiClient::new(config, Arc::new(MemoryStore::new())).unwrap();

    let outcome = commands::stats::overview(&client).await;
    assert_eq!(outcome.status(), 0);
    assert!(!outcome.is_success());
}
