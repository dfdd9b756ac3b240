//! API error types.

use mechkey_core::CoreError;
use thiserror::Error;

/// Error type for storefront API calls.
///
/// Every failure of the HTTP layer surfaces as one of these; nothing is
/// retried or swallowed.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a non-success status.
    #[error("HTTP {status} from {url}")]
    Status {
        /// Status code.
        status: u16,
        /// Request URL.
        url: String,
        /// Raw response body.
        body: String,
    },

    /// No response was received (connection failure or timeout).
    #[error("No response from server: {0}")]
    Network(#[source] reqwest::Error),

    /// The request could not be constructed.
    #[error("Request error: {0}")]
    Request(String),

    /// The response body did not have the expected shape.
    #[error("Unexpected response body from {url}: {source}")]
    Decode {
        /// Request URL.
        url: String,
        /// Parse failure.
        #[source]
        source: serde_json::Error,
    },

    /// Reading or writing the persisted bearer token failed.
    #[error("Token storage error: {0}")]
    Storage(#[from] CoreError),
}

impl ApiError {
    /// Returns the HTTP status for status errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns true for 401 responses.
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    /// Returns true for 404 responses.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Returns true if no response was received.
    pub fn is_network(&self) -> bool {
        matches!(self, ApiError::Network(_))
    }

    /// Returns true if the request timed out.
    pub fn is_timeout(&self) -> bool {
        matches!(self, ApiError::Network(e) if e.is_timeout())
    }
}
