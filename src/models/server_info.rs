//! Backend location as reported by the discovery service.

use serde::{Deserialize, Serialize};

/// Host and port of the main backend HTTP server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerInfo {
    pub host: String,
    pub port: u16,
}

impl ServerInfo {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// `http://host:port`, usable as a request origin.
    pub fn http_origin(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}
