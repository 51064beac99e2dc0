/*
[INPUT]:  HTTP configuration (endpoint settings, timeouts), credentials, token store
[OUTPUT]: Configured client that dispatches authenticated JSON requests
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing dispatch behavior
*/

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{CONTENT_TYPE, HeaderValue};
use reqwest::{Client, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::auth::{Credentials, TokenManager, TokenStore, shared_token_store};
use crate::http::response::{RawResponse, classify_response};
use crate::http::{Result, SwgohError};

pub const DEFAULT_PROTOCOL: &str = "https";
pub const DEFAULT_HOST: &str = "api.swgoh.help";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub protocol: String,
    pub host: String,
    /// Omitted from the base URL when `None`
    pub port: Option<u16>,
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            protocol: DEFAULT_PROTOCOL.to_string(),
            host: DEFAULT_HOST.to_string(),
            port: None,
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

impl ClientConfig {
    /// `{protocol}://{host}[:{port}]`, without trailing slash
    pub fn base_url(&self) -> String {
        match self.port {
            Some(port) => format!("{}://{}:{}", self.protocol, self.host, port),
            None => format!("{}://{}", self.protocol, self.host),
        }
    }
}

/// Main HTTP client for the SWGOH.help API
#[derive(Debug)]
pub struct SwgohClient {
    http_client: Client,
    base_url: String,
    tokens: TokenManager,
}

impl SwgohClient {
    /// Create a client with default settings and the process-wide token store
    pub fn new(credentials: Credentials) -> Result<Self> {
        Self::with_config(credentials, ClientConfig::default())
    }

    /// Create a client with custom settings and the process-wide token store
    pub fn with_config(credentials: Credentials, config: ClientConfig) -> Result<Self> {
        Self::with_store(credentials, config, shared_token_store())
    }

    /// Create a client with custom settings and an explicit token store
    pub fn with_store(
        credentials: Credentials,
        config: ClientConfig,
        store: Arc<dyn TokenStore>,
    ) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        let base_url = config.base_url();
        let signin_url = join_url(&base_url, "/auth/signin")?;
        let tokens = TokenManager::new(http_client.clone(), signin_url, credentials, store);

        Ok(Self {
            http_client,
            base_url,
            tokens,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Credential digest under which this client caches its token
    pub fn cache_key(&self) -> &str {
        self.tokens.cache_key()
    }

    /// Force a sign-in, replacing the cached token
    pub async fn sign_in(&self) -> Result<()> {
        self.tokens.sign_in().await.map(|_| ())
    }

    /// Make sure a token is cached, signing in if needed
    pub async fn get_token(&self) -> Result<()> {
        self.tokens.get_token().await.map(|_| ())
    }

    /// Build full URL for an endpoint path such as `/swgoh/player/`
    pub fn endpoint_url(&self, endpoint: &str) -> Result<Url> {
        join_url(&self.base_url, endpoint)
    }

    /// POST `payload` as JSON to `url` with the bearer token and decode the
    /// classified response.
    pub async fn send<T, P>(&self, url: Url, payload: &P) -> Result<T>
    where
        T: DeserializeOwned,
        P: Serialize + ?Sized,
    {
        let token = self.tokens.get_token().await?;
        let body = serde_json::to_vec(payload)?;

        debug!(url = %url, bytes = body.len(), "dispatching request");
        let outcome = match self
            .http_client
            .post(url.clone())
            .bearer_auth(token)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .body(body)
            .send()
            .await
        {
            Ok(response) => RawResponse::read(response).await,
            Err(err) => Err(err),
        };

        if let Ok(raw) = &outcome {
            debug!(url = %url, status = raw.status.as_u16(), "response received");
        }

        let value = classify_response(outcome)?;
        serde_json::from_value(value).map_err(|e| SwgohError::MalformedResponse {
            status: 200,
            message: format!("unexpected response shape: {e}"),
        })
    }
}

fn join_url(base_url: &str, endpoint: &str) -> Result<Url> {
    let raw = format!("{base_url}{endpoint}");
    Url::parse(&raw).map_err(|e| SwgohError::Config(format!("invalid URL {raw}: {e}")))
}
