//! The API client and its generic dispatch routine.

use std::sync::Arc;

use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;
use tokio::sync::RwLock;
use tracing::instrument;

use crate::call::Call;
use crate::config::ApiConfig;
use crate::error::{ApiError, parse_error_body};
use crate::request::{Endpoint, RequestBody};

/// Typed client for the Thriftwear `/v1` REST API.
///
/// Cheap to clone; clones share one connection pool and one
/// configuration. Every endpoint method issues the request on its own
/// tokio task and returns a cancelable [`Call`] immediately.
///
/// The client performs no retries, caching, or deduplication; every
/// failure surfaces to the caller as a typed [`ApiError`].
///
/// # Example
///
/// ```rust,ignore
/// use thriftwear_client::{ApiClient, ApiConfig};
///
/// let config = ApiConfig::from_env()?;
/// let client = ApiClient::new(config)?;
///
/// let call = client.get_category();
/// let categories = call.await?;
/// ```
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

struct ApiClientInner {
    http: reqwest::Client,
    /// Process-wide configuration; mutated only by the explicit update
    /// operations below, never by endpoint methods.
    config: RwLock<ApiConfig>,
}

impl ApiClient {
    /// Create a client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Transport` if the underlying HTTP client
    /// cannot be constructed.
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self {
            inner: Arc::new(ApiClientInner {
                http,
                config: RwLock::new(config),
            }),
        })
    }

    /// Snapshot of the current configuration.
    pub async fn config(&self) -> ApiConfig {
        self.inner.config.read().await.clone()
    }

    /// Replace the configuration for all subsequent calls.
    ///
    /// Calls already in flight keep the configuration they started with.
    pub async fn update_config(&self, config: ApiConfig) {
        *self.inner.config.write().await = config;
    }

    /// Attach a bearer token for subsequent calls (e.g. after sign-in).
    pub async fn set_token(&self, token: impl Into<String> + Send) {
        self.inner.config.write().await.token = Some(secrecy::SecretString::from(token.into()));
    }

    /// Drop the bearer token (e.g. on sign-out).
    pub async fn clear_token(&self) {
        self.inner.config.write().await.token = None;
    }

    /// Issue an endpoint's request on its own task and hand back the
    /// cancelable call.
    pub(crate) fn call<T>(&self, endpoint: Endpoint) -> Call<T>
    where
        T: DeserializeOwned + Send + 'static,
    {
        let inner = Arc::clone(&self.inner);
        Call::spawn(async move { dispatch(&inner, endpoint).await })
    }
}

/// Translate one endpoint descriptor into an HTTP exchange and its
/// response back into a typed result.
#[instrument(skip_all, fields(method = %endpoint.method, path = endpoint.path))]
async fn dispatch<T: DeserializeOwned>(
    inner: &ApiClientInner,
    mut endpoint: Endpoint,
) -> Result<T, ApiError> {
    if let Some(error) = endpoint.take_encode_error() {
        return Err(ApiError::Encode(error));
    }

    // Snapshot so a concurrent config update cannot tear this request.
    let config = inner.config.read().await.clone();
    let url = endpoint.resolve_url(&config.base_url);

    let mut request = inner
        .http
        .request(endpoint.method.clone(), url)
        .timeout(config.timeout)
        .headers(config.default_headers.clone());
    if let Some(token) = &config.token {
        request = request.bearer_auth(token.expose_secret());
    }
    request = match &endpoint.body {
        RequestBody::None => request,
        RequestBody::Json(value) => request.json(value),
        RequestBody::Form(pairs) => request.form(pairs),
    };

    let response = request.send().await?;
    let status = response.status();
    let text = response.text().await?;

    if status.is_success() {
        return serde_json::from_str(&text).map_err(ApiError::Decode);
    }

    tracing::debug!(status = status.as_u16(), "API call failed");
    let body = parse_error_body(&text);
    if status == reqwest::StatusCode::UNPROCESSABLE_ENTITY {
        return Err(ApiError::Validation { body });
    }
    Err(ApiError::Api {
        status: status.as_u16(),
        body,
    })
}
