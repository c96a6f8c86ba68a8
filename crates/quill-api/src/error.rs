//! Error types for the blog REST API.

use serde::Deserialize;

/// Error from blog API operations.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// HTTP request failed (network error, timeout, invalid JSON, etc).
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] ureq::Error),

    /// HTTP response error (server returned error status).
    #[error("HTTP error: {status} - {body}")]
    HttpResponse {
        /// HTTP status code.
        status: u16,
        /// Response body (may contain error details).
        body: String,
    },
}

/// FastAPI-style error body: `{"detail": "..."}`.
#[derive(Deserialize)]
struct ErrorBody {
    detail: String,
}

impl ApiError {
    /// HTTP status of an error response.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::HttpResponse { status, .. } => Some(*status),
            Self::HttpRequest(_) => None,
        }
    }

    /// Whether the server rejected the credentials or token.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status(), Some(401 | 403))
    }

    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Server-provided `detail` message, when the body carries one.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::HttpResponse { body, .. } => serde_json::from_str::<ErrorBody>(body)
                .ok()
                .map(|b| b.detail),
            Self::HttpRequest(_) => None,
        }
    }
}
