//! HubSpot HTTP client
//!
//! Thin wrapper over reqwest that handles:
//! - Bearer authentication from the connection's access token
//! - Joining CRM paths onto the base URL
//! - Aborting in-flight requests on cancellation
//! - Turning non-success responses into API errors
//!
//! Requests are sent exactly once. There is no retry or backoff at this layer.

use crate::config::Connection;
use crate::error::{Error, Result};
use crate::types::{JsonValue, ObjectType};
use reqwest::{Client, Method, StatusCode};
use serde_json::Value;
use std::collections::HashMap;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// User agent sent with every request
pub const USER_AGENT: &str = concat!("hubspot-tasks/", env!("CARGO_PKG_VERSION"));

/// Configuration for a single request
#[derive(Debug, Clone, Default)]
pub struct RequestConfig {
    /// Query parameters
    pub query: HashMap<String, String>,
    /// Request body (JSON)
    pub body: Option<Value>,
}

impl RequestConfig {
    /// Create a new request config
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a query parameter
    #[must_use]
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }

    /// Set JSON body
    #[must_use]
    pub fn json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

// ============================================================================
// Response
// ============================================================================

/// Status and raw body of a HubSpot response
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    pub fn is_not_found(&self) -> bool {
        self.status == StatusCode::NOT_FOUND
    }

    /// Parse the body as JSON. An empty body parses as `null`.
    pub fn json(&self) -> Result<JsonValue> {
        if self.body.trim().is_empty() {
            return Ok(JsonValue::Null);
        }
        Ok(serde_json::from_str(&self.body)?)
    }

    /// Error text reported by HubSpot.
    ///
    /// Uses the top-level `message`, then the first entry of `errors`,
    /// and falls back to the raw body when neither is present.
    pub fn error_detail(&self) -> String {
        serde_json::from_str::<JsonValue>(&self.body)
            .ok()
            .and_then(|json| {
                json.get("message")
                    .and_then(JsonValue::as_str)
                    .or_else(|| json.pointer("/errors/0/message").and_then(JsonValue::as_str))
                    .map(str::to_string)
            })
            .unwrap_or_else(|| self.body.clone())
    }

    /// Convert into an API error carrying the status and error detail
    pub fn into_error(self) -> Error {
        let detail = self.error_detail();
        Error::api(self.status, detail)
    }

    /// Pass a success response through, turn anything else into an API error
    pub fn error_for_status(self) -> Result<Self> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(self.into_error())
        }
    }
}

// ============================================================================
// Client
// ============================================================================

/// Authenticated HubSpot API client
pub struct HubSpotClient {
    client: Client,
    connection: Connection,
    cancel: CancellationToken,
}

impl HubSpotClient {
    /// Create a client for the given connection
    pub fn new(connection: &Connection) -> Result<Self> {
        let client = Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            connection: connection.clone(),
            cancel: CancellationToken::new(),
        })
    }

    /// Abort requests when `token` is cancelled
    #[must_use]
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = token;
        self
    }

    /// Make a GET request
    pub async fn get(&self, path: &str, config: RequestConfig) -> Result<ApiResponse> {
        self.request(Method::GET, path, config).await
    }

    /// Make a POST request
    pub async fn post(&self, path: &str, body: Value) -> Result<ApiResponse> {
        self.request(Method::POST, path, RequestConfig::default().json(body))
            .await
    }

    /// Make a PUT request
    pub async fn put(&self, path: &str, config: RequestConfig) -> Result<ApiResponse> {
        self.request(Method::PUT, path, config).await
    }

    /// Make a PATCH request
    pub async fn patch(&self, path: &str, body: Value) -> Result<ApiResponse> {
        self.request(Method::PATCH, path, RequestConfig::default().json(body))
            .await
    }

    /// Make a DELETE request
    pub async fn delete(&self, path: &str) -> Result<ApiResponse> {
        self.request(Method::DELETE, path, RequestConfig::default())
            .await
    }

    /// Make a generic request.
    ///
    /// Any status is returned as an [`ApiResponse`]; only transport failures
    /// and cancellation are errors.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        config: RequestConfig,
    ) -> Result<ApiResponse> {
        let url = self.connection.endpoint(path);

        let mut req = self
            .client
            .request(method.clone(), &url)
            .bearer_auth(&self.connection.api_key);

        if !config.query.is_empty() {
            req = req.query(&config.query);
        }

        if let Some(ref body) = config.body {
            req = req.json(body);
        }

        debug!("Sending request: {} {}", method, url);

        let send = async {
            let response = req.send().await?;
            let status = response.status();
            let body = response.text().await?;
            Ok::<_, Error>(ApiResponse { status, body })
        };

        let response = tokio::select! {
            biased;
            () = self.cancel.cancelled() => return Err(Error::Cancelled),
            result = send => result?,
        };

        debug!("Received {} from {} {}", response.status, method, url);
        Ok(response)
    }

    // ========================================================================
    // CRM helpers
    // ========================================================================

    /// Fetch a single contact with the given properties.
    ///
    /// Returns `None` when HubSpot answers 404.
    pub async fn get_contact(&self, id: &str, properties: &[&str]) -> Result<Option<JsonValue>> {
        let mut config = RequestConfig::new();
        if !properties.is_empty() {
            config = config.query("properties", properties.join(","));
        }

        let response = self
            .get(&ObjectType::Contacts.object_path(id), config)
            .await?;

        if response.is_not_found() {
            return Ok(None);
        }
        let response = response.error_for_status()?;
        Ok(Some(response.json()?))
    }

    /// Check whether a contact exists
    pub async fn contact_exists(&self, id: &str) -> Result<bool> {
        Ok(self.get_contact(id, &["id"]).await?.is_some())
    }

    /// Delete a CRM object (archives it in HubSpot)
    pub async fn delete_object(&self, object: ObjectType, id: &str) -> Result<ApiResponse> {
        self.delete(&object.object_path(id)).await
    }
}

impl std::fmt::Debug for HubSpotClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HubSpotClient")
            .field("connection", &self.connection)
            .field("cancelled", &self.cancel.is_cancelled())
            .finish_non_exhaustive()
    }
}
