//! Discovery HTTP server.
//!
//! A small axum server on a fixed port that tells the dashboard where the
//! main backend lives. When a built UI bundle is available it is served from
//! the same port so the dashboard can be opened directly.

use crate::error::AppError;
use crate::models::ServerInfo;
use crate::services::discovery::{HEALTH_PATH, SERVER_INFO_PATH};
use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

/// Fixed port of the discovery service.
pub const DISCOVERY_PORT: u16 = 12138;

/// Service name reported by the health endpoint.
pub const SERVICE_NAME: &str = "MoFox WebUI Discovery";

/// Discovery server configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscoveryServerConfig {
    /// Address the discovery server binds to.
    pub bind_host: String,

    /// Port the discovery server binds to; 0 picks a free port.
    pub port: u16,

    /// Host of the main backend, reported to clients.
    pub main_host: String,

    /// Port of the main backend, reported to clients.
    pub main_port: u16,

    /// Built UI bundle. Only served when it contains `index.html`.
    pub static_dir: Option<PathBuf>,
}

impl Default for DiscoveryServerConfig {
    fn default() -> Self {
        Self {
            bind_host: "127.0.0.1".to_string(),
            port: DISCOVERY_PORT,
            main_host: "127.0.0.1".to_string(),
            main_port: 8000,
            static_dir: None,
        }
    }
}

/// Handle to a running discovery server.
#[derive(Debug)]
pub struct DiscoveryServerHandle {
    local_addr: SocketAddr,
    cancel_token: CancellationToken,
    task: Mutex<Option<JoinHandle<()>>>,
}

impl DiscoveryServerHandle {
    /// Address the server actually bound to.
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Base URL clients should use, e.g. `http://127.0.0.1:12138`.
    pub fn url(&self) -> String {
        format!("http://{}", self.local_addr)
    }

    pub fn is_running(&self) -> bool {
        !self.cancel_token.is_cancelled()
    }

    /// Shut the server down gracefully and wait for it to finish.
    ///
    /// No-op when already stopped.
    pub async fn stop(&self) {
        self.cancel_token.cancel();

        let task = self.task.lock().await.take();
        if let Some(task) = task {
            log::info!("[discovery] Stopping server on {}", self.local_addr);
            if let Err(e) = task.await {
                log::error!("[discovery] Server task failed: {}", e);
            }
        }
    }
}

/// Build the discovery router.
pub fn router(config: &DiscoveryServerConfig) -> Router {
    let info = Arc::new(ServerInfo::new(config.main_host.clone(), config.main_port));

    let app = Router::new()
        .route(HEALTH_PATH, get(health))
        .route(SERVER_INFO_PATH, get(server_info))
        .with_state(info);

    let app = match config.static_dir.as_ref() {
        Some(dir) if dir.join("index.html").is_file() => {
            log::info!("[discovery] Serving UI bundle from {}", dir.display());
            app.fallback_service(ServeDir::new(dir))
        }
        Some(dir) => {
            log::info!(
                "[discovery] No index.html in {}, not serving static files",
                dir.display()
            );
            app
        }
        None => app,
    };

    app.layer(CorsLayer::permissive())
}

/// Bind and start the discovery server in a background task.
pub async fn start(config: &DiscoveryServerConfig) -> Result<DiscoveryServerHandle, AppError> {
    let app = router(config);

    let addr = format!("{}:{}", config.bind_host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::discovery(format!("Failed to bind to {}: {}", addr, e)))?;
    let local_addr = listener.local_addr()?;

    log::info!("[discovery] Server starting on http://{}", local_addr);
    log::info!(
        "[discovery] Main backend advertised as http://{}:{}",
        config.main_host,
        config.main_port
    );

    let cancel_token = CancellationToken::new();
    let cancel_clone = cancel_token.clone();

    let task = tokio::spawn(async move {
        let server = axum::serve(listener, app).with_graceful_shutdown(async move {
            cancel_clone.cancelled().await;
        });

        if let Err(e) = server.await {
            log::error!("[discovery] Server error: {}", e);
        }

        log::info!("[discovery] Server stopped");
    });

    Ok(DiscoveryServerHandle {
        local_addr,
        cancel_token,
        task: Mutex::new(Some(task)),
    })
}

async fn health() -> Json<Value> {
    Json(json!({"status": "ok", "service": SERVICE_NAME}))
}

async fn server_info(State(info): State<Arc<ServerInfo>>) -> Json<ServerInfo> {
    Json(info.as_ref().clone())
}
