/*
[INPUT]:  Username, password and optional OAuth client id/secret
[OUTPUT]: Sign-in form values and the credential digest used as cache key
[POS]:    Auth layer - immutable account credentials
[UPDATE]: When sign-in parameters or the cache key derivation change
*/

use std::fmt;

use sha2::{Digest, Sha256};

/// Placeholder sent when no client id is configured
pub const DEFAULT_CLIENT_ID: &str = "anything";
/// Placeholder sent when no client secret is configured
pub const DEFAULT_CLIENT_SECRET: &str = "something";

/// Account credentials for the sign-in endpoint
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    password: String,
    client_id: Option<String>,
    client_secret: Option<String>,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            client_id: None,
            client_secret: None,
        }
    }

    pub fn with_client(
        mut self,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        self.client_id = Some(client_id.into());
        self.client_secret = Some(client_secret.into());
        self
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub(crate) fn password(&self) -> &str {
        &self.password
    }

    /// Client id, or the placeholder when unset or empty
    pub fn client_id(&self) -> &str {
        non_empty(self.client_id.as_deref()).unwrap_or(DEFAULT_CLIENT_ID)
    }

    /// Client secret, or the placeholder when unset or empty
    pub fn client_secret(&self) -> &str {
        non_empty(self.client_secret.as_deref()).unwrap_or(DEFAULT_CLIENT_SECRET)
    }

    /// Hex SHA-256 of `username ++ password`.
    ///
    /// Depends on nothing else, so clients sharing credentials share a token.
    pub fn digest(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.username.as_bytes());
        hasher.update(self.password.as_bytes());
        hex::encode(hasher.finalize())
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("client_id", &self.client_id)
            .field("client_secret", &self.client_secret.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
