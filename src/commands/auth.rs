//! Authentication operations.
//!
//! The backend has no sessions: the API key itself is the credential and is
//! sent with every request. Logging in means storing the key and checking
//! that `GET auth/login` accepts it; logging out only forgets the key.

use crate::error::AppError;
use crate::models::{ActionResult, ApiResponse};
use crate::services::api_client::ApiClient;
use crate::services::endpoints::auth;
use crate::services::request::QueryParams;
use serde::Deserialize;

/// Reply of `auth/health`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AuthHealth {
    pub status: String,
    pub service: String,
}

/// Store `api_key` and verify it against the backend.
///
/// The key is cleared again when the backend rejects it, so a failed login
/// never leaves a half-authenticated client behind.
pub async fn login(client: &ApiClient, api_key: &str) -> ApiResponse<ActionResult> {
    if let Err(e) = client.set_token(Some(api_key)) {
        log::warn!("[api] Failed to persist API key: {}", e);
    }

    let response = verify(client).await;

    if !response.is_success() {
        log::info!("[api] Login rejected: {}", response.error_message());
        if let Err(e) = client.set_token(None) {
            log::warn!("[api] Failed to remove stored API key: {}", e);
        }
    }

    response
}

/// Forget the key locally. The backend keeps no session to end.
pub fn logout(client: &ApiClient) -> Result<(), AppError> {
    client.set_token(None)
}

/// Check that the held key is still accepted.
pub async fn verify(client: &ApiClient) -> ApiResponse<ActionResult> {
    client.get(auth::LOGIN, &QueryParams::new()).await
}

/// Whether the auth API is reachable at all; needs no key.
pub async fn health(client: &ApiClient) -> ApiResponse<AuthHealth> {
    client.get(auth::HEALTH, &QueryParams::new()).await
}
