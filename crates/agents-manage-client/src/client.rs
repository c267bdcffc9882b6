//! Main client implementation.

use std::sync::Arc;
use std::time::Duration;

use agents_manage_config::ManageApiConfig;
use reqwest::header::{CONTENT_TYPE, HeaderValue};
use serde::de::DeserializeOwned;

use crate::api::{AgentsApi, ApiKeysApi, ArtifactComponentsApi, CredentialsApi, ResourceApi};
use crate::error::{ErrorResponse, Result};
use crate::request::{RequestOptions, assemble_headers, bearer, build_url};

/// Management API client.
///
/// Cheap to clone; clones share the HTTP connection pool and configuration.
///
/// # Example
///
/// ```no_run
/// use agents_manage_client::ManageClient;
///
/// # async fn example() -> agents_manage_client::Result<()> {
/// let client = ManageClient::builder()
///     .base_url("http://localhost:3002")
///     .build()?;
///
/// let agents = client.agents().list("acme", "proj1").await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct ManageClient {
    inner: Arc<ClientInner>,
}

/// Inner client state (shared across clones).
struct ClientInner {
    http: reqwest::Client,
    config: ManageApiConfig,
    /// Precomputed `Authorization` value for the bypass secret.
    bypass_auth: Option<HeaderValue>,
    /// Per-request timeout; `None` leaves timing to the caller.
    timeout: Option<Duration>,
}

impl ManageClient {
    /// Create a new client builder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Create a client configured from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::builder().config(ManageApiConfig::from_env()).build()
    }

    /// The management API base URL (resolved on first use).
    pub fn base_url(&self) -> &str {
        self.inner.config.base_url()
    }

    /// The configuration this client was built from.
    pub fn config(&self) -> &ManageApiConfig {
        &self.inner.config
    }

    // ─────────────────────────────────────────────────────────────────────────
    // API accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Access the agents API.
    pub fn agents(&self) -> AgentsApi {
        ResourceApi::new(self.clone())
    }

    /// Access the credentials API.
    pub fn credentials(&self) -> CredentialsApi {
        ResourceApi::new(self.clone())
    }

    /// Access the API keys API.
    pub fn api_keys(&self) -> ApiKeysApi {
        ResourceApi::new(self.clone())
    }

    /// Access the artifact components API.
    pub fn artifact_components(&self) -> ArtifactComponentsApi {
        ResourceApi::new(self.clone())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Request pipeline
    // ─────────────────────────────────────────────────────────────────────────

    /// Send a request to `endpoint` (relative to the base URL).
    ///
    /// Returns `Ok(None)` for successful responses without a JSON body.
    /// Non-success responses become [`Error::Api`](crate::Error::Api) with the
    /// server's code and message; transport failures and unreadable success
    /// bodies become [`Error::Internal`](crate::Error::Internal).
    ///
    /// No timeout is applied unless one was set on the builder. Dropping the
    /// returned future cancels the request.
    pub async fn request<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<Option<T>> {
        let url = build_url(self.base_url(), endpoint, &options.query);
        let headers = assemble_headers(&options.headers, self.inner.bypass_auth.as_ref());
        tracing::debug!(method = %options.method, url = %url, "management API request");

        let mut request = self
            .inner
            .http
            .request(options.method, url.as_str())
            .headers(headers);
        if let Some(body) = options.body {
            request = request.body(body);
        }
        if let Some(timeout) = self.inner.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await?;
        self.handle_response(&url, response).await
    }

    /// Classify a response into a payload, the empty sentinel, or an error.
    async fn handle_response<T: DeserializeOwned>(
        &self,
        url: &str,
        response: reqwest::Response,
    ) -> Result<Option<T>> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let err = ErrorResponse::into_error(&body, status.as_u16());
            tracing::debug!(url, status = status.as_u16(), code = err.code(), "management API error");
            return Err(err);
        }

        let is_json = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.contains("application/json"));
        if !is_json {
            return Ok(None);
        }

        let text = response.text().await?;
        if text.is_empty() {
            return Ok(None);
        }
        Ok(Some(serde_json::from_str(&text)?))
    }
}

/// Builder for creating a [`ManageClient`].
#[derive(Debug, Default)]
pub struct ClientBuilder {
    config: Option<ManageApiConfig>,
    base_url: Option<String>,
    bypass_secret: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl ClientBuilder {
    /// Create a new builder with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a resolved configuration.
    ///
    /// Without one, the environment is read at build time.
    pub fn config(mut self, config: ManageApiConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the base URL, overriding the configuration.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the bypass secret, overriding the configuration.
    pub fn bypass_secret(mut self, secret: impl Into<String>) -> Self {
        self.bypass_secret = Some(secret.into());
        self
    }

    /// Apply a timeout to every request. Unset by default.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<ManageClient> {
        let mut config = self.config.unwrap_or_else(ManageApiConfig::from_env);
        if let Some(url) = self.base_url {
            config = config.with_base_url(url);
        }
        if let Some(secret) = self.bypass_secret {
            config = config.with_bypass_secret(secret);
        }

        let bypass_auth = config.bypass_secret().map(bearer).transpose()?;

        let user_agent = self
            .user_agent
            .unwrap_or_else(|| format!("agents-manage-client/{}", env!("CARGO_PKG_VERSION")));

        let http = reqwest::Client::builder().user_agent(user_agent).build()?;

        Ok(ManageClient {
            inner: Arc::new(ClientInner {
                http,
                config,
                bypass_auth,
                timeout: self.timeout,
            }),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_env() -> ManageApiConfig {
        ManageApiConfig::from_lookup(|_| None)
    }

    #[test]
    fn test_builder_with_base_url() {
        let client = ClientBuilder::new()
            .config(empty_env())
            .base_url("http://localhost:8080")
            .build()
            .unwrap();

        assert_eq!(client.base_url(), "http://localhost:8080");
        assert!(!client.config().has_warned());
    }

    #[test]
    fn test_builder_falls_back_to_default_url() {
        let client = ClientBuilder::new().config(empty_env()).build().unwrap();

        assert_eq!(client.base_url(), agents_manage_config::DEFAULT_MANAGE_API_URL);
        assert!(client.config().has_warned());
    }

    #[test]
    fn test_builder_bypass_secret() {
        let client = ClientBuilder::new()
            .config(empty_env())
            .bypass_secret("s3cret")
            .build()
            .unwrap();

        assert_eq!(client.config().bypass_secret(), Some("s3cret"));
        assert!(client.inner.bypass_auth.is_some());
    }

    #[test]
    fn test_builder_rejects_unencodable_secret() {
        let result = ClientBuilder::new()
            .config(empty_env())
            .bypass_secret("line\nbreak")
            .build();

        assert!(matches!(result, Err(crate::Error::Config(_))));
    }

    #[test]
    fn test_clones_share_config() {
        let client = ClientBuilder::new().config(empty_env()).build().unwrap();
        let clone = client.clone();
        let _ = clone.base_url();
        assert!(client.config().has_warned());
    }
}
