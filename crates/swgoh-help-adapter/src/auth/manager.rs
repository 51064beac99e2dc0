/*
[INPUT]:  Credentials, sign-in URL, shared HTTP client and token store
[OUTPUT]: A currently valid bearer token
[POS]:    Auth layer - sign-in and token caching
[UPDATE]: When the sign-in contract or token lifetime changes
*/

use std::fmt;
use std::sync::Arc;

use chrono::Duration;
use reqwest::{Client, StatusCode, Url};
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::http::{Result, SwgohError};

use super::{Credentials, TokenStore};

/// Cached tokens are trusted for one hour
pub const TOKEN_TTL_SECONDS: i64 = 3600;

/// Response from the sign-in endpoint
#[derive(Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    /// Not used for expiry; the fixed one-hour lifetime applies
    #[serde(default)]
    pub expires_in: Option<serde_json::Value>,
}

/// Signs in and caches the session token under the credential digest
pub struct TokenManager {
    http_client: Client,
    signin_url: Url,
    credentials: Credentials,
    cache_key: String,
    store: Arc<dyn TokenStore>,
}

impl TokenManager {
    pub fn new(
        http_client: Client,
        signin_url: Url,
        credentials: Credentials,
        store: Arc<dyn TokenStore>,
    ) -> Self {
        let cache_key = credentials.digest();
        Self {
            http_client,
            signin_url,
            credentials,
            cache_key,
            store,
        }
    }

    /// Credential digest used as the store key
    pub fn cache_key(&self) -> &str {
        &self.cache_key
    }

    pub fn signin_url(&self) -> &Url {
        &self.signin_url
    }

    /// Return the cached token, signing in on a miss.
    ///
    /// The lookup and the sign-in are not atomic: callers racing on a miss each
    /// sign in and the last write wins. Any issued token is valid, so this only
    /// costs an extra round trip.
    pub async fn get_token(&self) -> Result<String> {
        if let Some(token) = self.store.get(&self.cache_key) {
            debug!(username = %self.credentials.username(), "using cached session token");
            return Ok(token);
        }

        debug!(username = %self.credentials.username(), "no cached session token");
        self.sign_in().await
    }

    /// Sign in against `/auth/signin` and cache the returned token.
    ///
    /// A non-200 status fails with [`SwgohError::Authentication`]; nothing is retried.
    pub async fn sign_in(&self) -> Result<String> {
        let form = [
            ("username", self.credentials.username()),
            ("password", self.credentials.password()),
            ("grant_type", "password"),
            ("client_id", self.credentials.client_id()),
            ("client_secret", self.credentials.client_secret()),
        ];

        debug!(url = %self.signin_url, username = %self.credentials.username(), "signing in");
        let response = self
            .http_client
            .post(self.signin_url.clone())
            .form(&form)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            warn!(status = status.as_u16(), "sign-in rejected");
            return Err(SwgohError::Authentication {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        let login: LoginResponse =
            serde_json::from_slice(&body).map_err(|e| SwgohError::MalformedResponse {
                status: status.as_u16(),
                message: format!("sign-in response: {e}"),
            })?;

        self.store_token(&login.access_token);
        info!(username = %self.credentials.username(), "signed in");

        Ok(login.access_token)
    }

    /// Cache `token` under the credential digest, replacing any previous one
    pub fn store_token(&self, token: &str) {
        self.store.put(
            &self.cache_key,
            token.to_string(),
            Duration::seconds(TOKEN_TTL_SECONDS),
        );
    }
}

impl fmt::Debug for TokenManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenManager")
            .field("signin_url", &self.signin_url.as_str())
            .field("credentials", &self.credentials)
            .field("cache_key", &self.cache_key)
            .finish_non_exhaustive()
    }
}
