//! Normalized outcome of a backend call.

use crate::error::AppError;
use serde::Serialize;

/// Status reserved for failures where no HTTP response was received.
pub const NETWORK_FAILURE_STATUS: u16 = 0;

/// Fallback message for transport failures without a usable description.
pub const GENERIC_NETWORK_ERROR: &str = "Network request failed";

/// Result of every API client call.
///
/// Exactly one of three shapes is ever produced:
/// - success with a 2xx status (payload optional),
/// - failure with a non-2xx HTTP status and an error message,
/// - failure with status `0` for transport errors.
///
/// The fields are private so the shapes can only be built through the
/// constructors below.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiResponse<T> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    status: u16,
}

impl<T> ApiResponse<T> {
    /// A 2xx response. `data` is `None` when the body was empty or not valid JSON.
    pub(crate) fn ok(data: Option<T>, status: u16) -> Self {
        debug_assert!((200..300).contains(&status));
        Self {
            success: true,
            data,
            error: None,
            status,
        }
    }

    /// A non-2xx HTTP response.
    pub(crate) fn http_failure(status: u16, error: impl Into<String>) -> Self {
        debug_assert!(!(200..300).contains(&status) && status != NETWORK_FAILURE_STATUS);
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
            status,
        }
    }

    /// A transport-level failure (DNS, refused connection, timeout, abort).
    pub(crate) fn network_failure(error: impl Into<String>) -> Self {
        let error = error.into();
        Self {
            success: false,
            data: None,
            error: Some(if error.is_empty() {
                GENERIC_NETWORK_ERROR.to_string()
            } else {
                error
            }),
            status: NETWORK_FAILURE_STATUS,
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn into_data(self) -> Option<T> {
        self.data
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// True when no HTTP response was received at all.
    pub fn is_network_failure(&self) -> bool {
        !self.success && self.status == NETWORK_FAILURE_STATUS
    }

    /// Error text suitable for display; falls back to a generic message.
    pub fn error_message(&self) -> &str {
        self.error.as_deref().unwrap_or("Unknown error")
    }

    /// Transform the payload, keeping status and error untouched.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ApiResponse<U> {
        ApiResponse {
            success: self.success,
            data: self.data.map(f),
            error: self.error,
            status: self.status,
        }
    }

    /// Convert into a `Result` for callers that prefer `?` propagation.
    pub fn into_result(self) -> Result<Option<T>, AppError> {
        if self.success {
            return Ok(self.data);
        }
        let message = self.error.unwrap_or_else(|| "Unknown error".to_string());
        Err(match self.status {
            NETWORK_FAILURE_STATUS => AppError::network(message),
            401 | 403 => AppError::authentication(message),
            status => AppError::Api {
                message,
                status_code: Some(status),
                endpoint: None,
            },
        })
    }
}
