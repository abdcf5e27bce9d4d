//! Request plumbing shared by every endpoint wrapper.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use reqwest::header::{CACHE_CONTROL, PRAGMA};
use reqwest::{Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ClientConfig;
use crate::error::ClientError;

/// Cache-busting query parameter added to every read.
pub const CACHE_BUST_PARAM: &str = "_t";

/// HTTP client for the content API.
///
/// Cheap to clone; clones share the connection pool and the fallback
/// counter.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ClientConfig,
    token: Option<String>,
    fallbacks: Arc<AtomicU64>,
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self::with_client(http, config))
    }

    /// Reuse an existing [`reqwest::Client`].
    pub fn with_client(http: reqwest::Client, config: ClientConfig) -> Self {
        Self {
            http,
            config,
            token: None,
            fallbacks: Arc::new(AtomicU64::new(0)),
        }
    }

    /// A copy of this client that sends `Authorization: Bearer <token>`.
    pub fn with_token(&self, token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
            ..self.clone()
        }
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// How many reads have fallen back to a default value.
    pub fn fallback_count(&self) -> u64 {
        self.fallbacks.load(Ordering::Relaxed)
    }

    // ---- request helpers ----

    /// Start a request to `path` (which begins with `/`).
    ///
    /// GET requests get a fresh cache-busting parameter and no-cache
    /// headers so edits show up immediately.
    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let is_read = method == Method::GET;
        let mut builder = self
            .http
            .request(method, format!("{}{}", self.config.base_url, path));

        if is_read {
            let now = chrono::Utc::now().timestamp_millis().to_string();
            builder = builder
                .query(&[(CACHE_BUST_PARAM, now)])
                .header(CACHE_CONTROL, "no-cache, no-store")
                .header(PRAGMA, "no-cache");
        }
        if let Some(token) = &self.token {
            builder = builder.bearer_auth(token);
        }
        builder
    }

    /// Send a request and decode a JSON body.
    pub(crate) async fn execute<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> Result<T, ClientError> {
        let response = Self::ensure_success(builder.send().await?).await?;
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Send a request whose success body is irrelevant.
    pub(crate) async fn execute_empty(&self, builder: RequestBuilder) -> Result<(), ClientError> {
        Self::ensure_success(builder.send().await?).await?;
        Ok(())
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        self.execute(self.request(Method::GET, path)).await
    }

    pub(crate) async fn send_json<B, T>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.execute(self.request(method, path).json(body)).await
    }

    /// Read `path`, substituting `T::default()` on any fault.
    pub(crate) async fn read_or_default<T>(&self, path: &str) -> T
    where
        T: DeserializeOwned + Default,
    {
        match self.get_json(path).await {
            Ok(value) => value,
            Err(e) => {
                self.record_fallback(path, &e);
                T::default()
            }
        }
    }

    /// Read a single record. 404 is `None` without counting as a fallback;
    /// any other fault is logged and counted.
    pub(crate) async fn read_optional<T: DeserializeOwned>(&self, path: &str) -> Option<T> {
        self.read_optional_with(path, self.request(Method::GET, path))
            .await
    }

    /// [`read_optional`](Self::read_optional) for a prepared GET, e.g. one
    /// carrying extra query parameters. `endpoint` is used for logging.
    pub(crate) async fn read_optional_with<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        builder: RequestBuilder,
    ) -> Option<T> {
        match self.execute(builder).await {
            Ok(value) => Some(value),
            Err(e) if e.is_not_found() => None,
            Err(e) => {
                self.record_fallback(endpoint, &e);
                None
            }
        }
    }

    fn record_fallback(&self, endpoint: &str, error: &ClientError) {
        let total = self.fallbacks.fetch_add(1, Ordering::Relaxed) + 1;
        tracing::warn!(
            endpoint,
            error = %error,
            fallbacks = total,
            "Content read failed, using default"
        );
    }

    /// Map a non-2xx response to [`ClientError::Api`], taking the message
    /// from the server's `error` field when present.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(ClientError::Api {
            status: status.as_u16(),
            message: error_message(status, &body),
        })
    }
}

fn error_message(status: StatusCode, body: &str) -> String {
    let from_json = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(str::to_string));

    match from_json {
        Some(message) => message,
        None if !body.trim().is_empty() => body.trim().to_string(),
        None => status
            .canonical_reason()
            .unwrap_or("Request failed")
            .to_string(),
    }
}
