//! HTTP client wrapper for the storefront API.
//!
//! Wraps a `reqwest` client with:
//! - a fixed base URL, default headers, and a fixed timeout
//! - bearer token attachment from persisted storage before each request
//! - status classification after each response (401 clears the token)
//!
//! Failures are logged and returned to the caller unchanged. There are no
//! retries.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use mechkey_core::{KeyValueStorage, keys};
use reqwest::header::{self, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, error, instrument, warn};
use url::Url;

use crate::error::ApiError;
use crate::query::QueryParams;
use crate::resources::{AdminCategoriesApi, AdminProductsApi, CategoriesApi, ProductsApi};

/// Default API base URL.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// User agent string for the client.
const USER_AGENT: &str = concat!("mechkey/", env!("CARGO_PKG_VERSION"));

/// Header that suppresses the tunnel interstitial page in front of the API.
const TUNNEL_BYPASS_HEADER: &str = "ngrok-skip-browser-warning";

// ============================================================================
// Client Settings
// ============================================================================

/// Settings for the API client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    /// Base URL all request paths are resolved against.
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Whether to send the tunnel bypass header.
    pub bypass_tunnel_warning: bool,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            bypass_tunnel_warning: true,
        }
    }
}

impl ClientSettings {
    /// Creates settings for the given base URL with default timeout.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

// ============================================================================
// API Client
// ============================================================================

/// HTTP client for the storefront API.
///
/// Cheap to clone; clones share the connection pool and the token storage.
#[derive(Clone)]
pub struct ApiClient {
    inner: Client,
    base_url: Url,
    storage: Arc<dyn KeyValueStorage>,
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Creates a client from settings, reading the bearer token from `storage`.
    pub fn new(
        settings: &ClientSettings,
        storage: Arc<dyn KeyValueStorage>,
    ) -> Result<Self, ApiError> {
        let mut base_url = Url::parse(&settings.base_url)
            .map_err(|e| ApiError::Request(format!("invalid base URL {}: {e}", settings.base_url)))?;

        // Url::join replaces the last segment unless the path ends with '/'
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let inner = Client::builder()
            .timeout(settings.timeout)
            .user_agent(USER_AGENT)
            .default_headers(default_headers(settings.bypass_tunnel_warning))
            .build()
            .map_err(|e| ApiError::Request(format!("failed to build HTTP client: {e}")))?;

        debug!(base_url = %base_url, timeout_ms = settings.timeout.as_millis(), "API client ready");

        Ok(Self {
            inner,
            base_url,
            storage,
        })
    }

    /// Returns the base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolves an API path against the base URL.
    pub fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| ApiError::Request(format!("invalid path {path}: {e}")))
    }

    // ------------------------------------------------------------------------
    // Resource APIs
    // ------------------------------------------------------------------------

    /// Storefront product endpoints.
    pub fn products(&self) -> ProductsApi<'_> {
        ProductsApi::new(self)
    }

    /// Storefront category endpoints.
    pub fn categories(&self) -> CategoriesApi<'_> {
        CategoriesApi::new(self)
    }

    /// Admin product endpoints.
    pub fn admin_products(&self) -> AdminProductsApi<'_> {
        AdminProductsApi::new(self)
    }

    /// Admin category endpoints.
    pub fn admin_categories(&self) -> AdminCategoriesApi<'_> {
        AdminCategoriesApi::new(self)
    }

    // ------------------------------------------------------------------------
    // Bearer Token
    // ------------------------------------------------------------------------

    /// Stores the bearer token sent with subsequent requests.
    pub fn set_token(&self, token: &str) -> Result<(), ApiError> {
        self.storage.set(keys::AUTH_TOKEN, token)?;
        debug!("Auth token stored");
        Ok(())
    }

    /// Removes the bearer token.
    pub fn clear_token(&self) -> Result<(), ApiError> {
        self.storage.remove(keys::AUTH_TOKEN)?;
        debug!("Auth token cleared");
        Ok(())
    }

    /// Returns true if a non-empty bearer token is stored.
    pub fn has_token(&self) -> Result<bool, ApiError> {
        Ok(self
            .storage
            .get(keys::AUTH_TOKEN)?
            .is_some_and(|t| !t.is_empty()))
    }

    // ------------------------------------------------------------------------
    // Verbs
    // ------------------------------------------------------------------------

    /// Performs a GET request with query parameters.
    #[instrument(skip(self, query), fields(path = %path))]
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &QueryParams,
    ) -> Result<T, ApiError> {
        let url = self.endpoint(path)?;
        self.send(self.inner.get(url).query(query)).await
    }

    /// Performs a POST request with a JSON body.
    #[instrument(skip(self, body), fields(path = %path))]
    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.endpoint(path)?;
        self.send(self.inner.post(url).json(body)).await
    }

    /// Performs a PUT request with a JSON body.
    #[instrument(skip(self, body), fields(path = %path))]
    pub async fn put<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.endpoint(path)?;
        self.send(self.inner.put(url).json(body)).await
    }

    /// Performs a DELETE request.
    #[instrument(skip(self), fields(path = %path))]
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.endpoint(path)?;
        self.send(self.inner.delete(url)).await
    }

    // ------------------------------------------------------------------------
    // Interceptors
    // ------------------------------------------------------------------------

    /// Attaches the persisted bearer token, if any.
    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.storage.get(keys::AUTH_TOKEN) {
            Ok(Some(token)) if !token.is_empty() => builder.bearer_auth(token),
            Ok(_) => builder,
            Err(e) => {
                warn!(error = %e, "Could not read auth token, sending request without it");
                builder
            }
        }
    }

    /// Sends a request and decodes a successful JSON response.
    async fn send<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, ApiError> {
        let request = self.authorize(builder).build().map_err(|e| {
            error!(error = %e, "Request error");
            ApiError::Request(e.to_string())
        })?;

        let url = request.url().clone();
        debug!(method = %request.method(), url = %url, "Sending request");

        let response = self.inner.execute(request).await.map_err(|e| {
            if e.is_builder() {
                error!(error = %e, "Request error");
                ApiError::Request(e.to_string())
            } else {
                error!(url = %url, error = %e, "No response from server");
                ApiError::Network(e)
            }
        })?;

        let status = response.status();
        debug!(status = %status, "Response received");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(self.reject(status, &url, body));
        }

        let bytes = response.bytes().await.map_err(|e| {
            error!(url = %url, error = %e, "No response from server");
            ApiError::Network(e)
        })?;

        // Bodiless success responses decode as an empty object
        let body: &[u8] = if bytes.iter().all(u8::is_ascii_whitespace) {
            b"{}"
        } else {
            &bytes
        };

        serde_json::from_slice(body).map_err(|source| {
            error!(url = %url, error = %source, "Unexpected response body");
            ApiError::Decode {
                url: url.to_string(),
                source,
            }
        })
    }

    /// Classifies a non-success response.
    fn reject(&self, status: StatusCode, url: &Url, body: String) -> ApiError {
        match status {
            StatusCode::UNAUTHORIZED => {
                warn!(url = %url, "Unauthorized, clearing auth token");
                if let Err(e) = self.storage.remove(keys::AUTH_TOKEN) {
                    error!(error = %e, "Failed to clear auth token");
                }
            }
            StatusCode::NOT_FOUND => error!(url = %url, "Resource not found"),
            StatusCode::INTERNAL_SERVER_ERROR => error!(url = %url, body = %body, "Server error"),
            _ => debug!(status = %status, url = %url, "Request rejected"),
        }

        ApiError::Status {
            status: status.as_u16(),
            url: url.to_string(),
            body,
        }
    }
}

fn default_headers(bypass_tunnel_warning: bool) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
    if bypass_tunnel_warning {
        headers.insert(
            HeaderName::from_static(TUNNEL_BYPASS_HEADER),
            HeaderValue::from_static("true"),
        );
    }
    headers
}

// ============================================================================
// Tests
// ============================================================================
