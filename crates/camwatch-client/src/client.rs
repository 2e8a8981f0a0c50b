//! Main registry API client implementation.

use crate::api::CamerasApi;
use crate::config::Credentials;
use camwatch_core::{CamwatchError, Result};
use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// The production registry base URL
pub const DEFAULT_BASE_URL: &str = "https://cctv-api.neuronomous.net/api/v1/public";

/// Default timeout for the camera list fetch
const DEFAULT_LIST_TIMEOUT: Duration = Duration::from_secs(5);

/// Registry API client
///
/// Cheap to clone; all clones share one connection pool and credential set.
#[derive(Clone)]
pub struct RegistryClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http: HttpClient,
    base_url: String,
    list_timeout: Duration,
}

impl RegistryClient {
    /// Create a client against the production registry with default settings
    pub fn new(credentials: Credentials) -> Result<Self> {
        RegistryClientBuilder::new(credentials).build()
    }

    /// Create a builder for custom configuration
    #[must_use]
    pub fn builder(credentials: Credentials) -> RegistryClientBuilder {
        RegistryClientBuilder::new(credentials)
    }

    /// Access camera endpoints
    #[must_use]
    pub fn cameras(&self) -> CamerasApi<'_> {
        CamerasApi::new(self)
    }

    /// Perform a GET request bounded by the list-fetch timeout
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.inner.base_url, path);
        debug!(url = %url, "GET request");

        let response = self
            .inner
            .http
            .get(&url)
            .timeout(self.inner.list_timeout)
            .send()
            .await
            .map_err(|e| CamwatchError::Http(e.to_string()))?;

        self.handle_response(response).await
    }

    /// Perform a PATCH request with a JSON body.
    ///
    /// No per-request timeout: the submission call runs on client defaults.
    pub(crate) async fn patch<B: serde::Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<()> {
        let url = format!("{}{}", self.inner.base_url, path);
        debug!(url = %url, "PATCH request");

        let response = self
            .inner
            .http
            .patch(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| CamwatchError::Http(e.to_string()))?;

        self.handle_empty_response(response).await
    }

    /// Handle a registry response that returns JSON
    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();

        if status.is_success() {
            let body = response
                .text()
                .await
                .map_err(|e| CamwatchError::Http(e.to_string()))?;
            serde_json::from_str(&body).map_err(CamwatchError::Json)
        } else {
            Self::handle_error(status.as_u16(), response).await
        }
    }

    /// Handle a registry response where only the status matters
    async fn handle_empty_response(&self, response: reqwest::Response) -> Result<()> {
        let status = response.status();

        if status.is_success() {
            Ok(())
        } else {
            Self::handle_error(status.as_u16(), response).await
        }
    }

    /// Convert an error response to a [`CamwatchError`]
    async fn handle_error<T>(status: u16, response: reqwest::Response) -> Result<T> {
        let body = response.text().await.unwrap_or_default();

        // The registry wraps errors as {"message": "..."}
        let message = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(String::from))
            .unwrap_or(body);

        match status {
            401 | 403 => Err(CamwatchError::Unauthorized),
            _ => Err(CamwatchError::Api {
                code: status,
                message,
            }),
        }
    }
}

/// Builder for configuring a [`RegistryClient`]
pub struct RegistryClientBuilder {
    credentials: Credentials,
    base_url: String,
    list_timeout: Duration,
    user_agent: String,
}

impl RegistryClientBuilder {
    /// Create a new builder with the given credentials
    #[must_use]
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            base_url: DEFAULT_BASE_URL.to_string(),
            list_timeout: DEFAULT_LIST_TIMEOUT,
            user_agent: format!("camwatch/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Set the base URL (useful for testing)
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the camera list fetch timeout
    #[must_use]
    pub const fn list_timeout(mut self, timeout: Duration) -> Self {
        self.list_timeout = timeout;
        self
    }

    /// Set the User-Agent header
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    /// Build the client
    pub fn build(self) -> Result<RegistryClient> {
        let headers = self.credentials.to_headers()?;

        let http = HttpClient::builder()
            .default_headers(headers)
            .user_agent(&self.user_agent)
            .build()
            .map_err(|e| CamwatchError::Config(e.to_string()))?;

        Ok(RegistryClient {
            inner: Arc::new(ClientInner {
                http,
                base_url: self.base_url,
                list_timeout: self.list_timeout,
            }),
        })
    }
}
