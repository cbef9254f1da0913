/*
[INPUT]:  HTTP configuration (base URL, timeouts, credentials)
[OUTPUT]: Configured reqwest client ready for Graph API calls
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;

use crate::http::proof::AppSecretProof;
use crate::http::{Result, WallStreamError};

/// Base URL for the versioned Graph API
const GRAPH_BASE_URL: &str = "https://graph.facebook.com/v2.3/";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// Credentials the client is constructed with.
///
/// Opaque strings sourced by the caller; immutable for the client's lifetime.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub api_key: String,
    pub app_secret: String,
    pub access_token: String,
}

impl Credentials {
    pub fn new(
        api_key: impl Into<String>,
        app_secret: impl Into<String>,
        access_token: impl Into<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            app_secret: app_secret.into(),
            access_token: access_token.into(),
        }
    }
}

/// Main HTTP client for the Graph feed API
#[derive(Debug)]
pub struct GraphClient {
    http_client: Client,
    base_url: Url,
    credentials: Credentials,
    proof: String,
}

impl GraphClient {
    /// Create a new client with default configuration
    pub fn new(credentials: Credentials) -> Result<Self> {
        Self::with_config(credentials, ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(credentials: Credentials, config: ClientConfig) -> Result<Self> {
        Self::with_config_and_base_url(credentials, config, GRAPH_BASE_URL)
    }

    /// Create a new client against an explicit base URL
    pub fn with_config_and_base_url(
        credentials: Credentials,
        config: ClientConfig,
        base_url: &str,
    ) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        let proof = AppSecretProof::new(&credentials.app_secret).compute(&credentials.access_token);

        Ok(Self {
            http_client,
            base_url: parse_base_url(base_url)?,
            credentials,
            proof,
        })
    }

    /// Get the credentials the client was built with
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Build full URL for Graph endpoints
    fn graph_url(&self, endpoint: &str) -> Result<Url> {
        Ok(self.base_url.join(endpoint.trim_start_matches('/'))?)
    }

    /// Build request builder for Graph endpoints, with token and proof attached
    pub(crate) fn graph_request(&self, method: Method, endpoint: &str) -> Result<RequestBuilder> {
        let url = self.graph_url(endpoint)?;
        Ok(self.http_client.request(method, url).query(&[
            ("access_token", self.credentials.access_token.as_str()),
            ("appsecret_proof", self.proof.as_str()),
        ]))
    }

    /// Build request builder for an absolute, already-derived URL
    pub(crate) fn absolute_request(&self, method: Method, url: Url) -> RequestBuilder {
        self.http_client.request(method, url)
    }

    /// Execute a request and decode the JSON body.
    ///
    /// Non-2xx responses are mapped through the Graph error envelope.
    pub(crate) async fn send_json<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> Result<T> {
        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(WallStreamError::from_error_body(status, &body));
        }

        serde_json::from_str(&body).map_err(WallStreamError::from)
    }
}

// Url::join resolves relative to the last path segment, so the base must end
// in '/' for "{wall_id}/posts" to land under the version prefix.
fn parse_base_url(raw: &str) -> Result<Url> {
    let url = if raw.ends_with('/') {
        Url::parse(raw)?
    } else {
        Url::parse(&format!("{raw}/"))?
    };
    Ok(url)
}
