/*
[INPUT]:  YAML configuration file
[OUTPUT]: Parsed credentials and endpoint settings, ready-to-use client
[POS]:    Configuration layer - client setup
[UPDATE]: When adding new configuration options
*/

use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use swgoh_help_adapter::{ClientConfig, Credentials, SwgohClient};

/// Top-level configuration for the command-line client
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CliConfig {
    /// SWGOH.help account name
    pub username: String,
    /// SWGOH.help account password
    pub password: String,
    #[serde(default)]
    pub client_id: Option<String>,
    #[serde(default)]
    pub client_secret: Option<String>,
    /// "http" or "https"
    #[serde(default = "default_protocol")]
    pub protocol: String,
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default)]
    pub port: Option<u16>,
    /// Whole-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_protocol() -> String {
    swgoh_help_adapter::http::DEFAULT_PROTOCOL.to_string()
}

fn default_host() -> String {
    swgoh_help_adapter::http::DEFAULT_HOST.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl CliConfig {
    /// Load configuration from YAML file
    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> anyhow::Result<Self> {
        let config: Self = serde_yaml::from_str(content).context("parse config yaml")?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(!self.username.trim().is_empty(), "username must not be empty");
        anyhow::ensure!(!self.password.is_empty(), "password must not be empty");
        anyhow::ensure!(self.timeout_secs > 0, "timeout_secs must be positive");
        Ok(())
    }

    pub fn credentials(&self) -> Credentials {
        let credentials = Credentials::new(&self.username, &self.password);
        match (&self.client_id, &self.client_secret) {
            (None, None) => credentials,
            (id, secret) => credentials.with_client(
                id.clone().unwrap_or_default(),
                secret.clone().unwrap_or_default(),
            ),
        }
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            protocol: self.protocol.clone(),
            host: self.host.clone(),
            port: self.port,
            timeout: Duration::from_secs(self.timeout_secs),
            ..ClientConfig::default()
        }
    }

    pub fn build_client(&self) -> anyhow::Result<SwgohClient> {
        SwgohClient::with_config(self.credentials(), self.client_config())
            .context("build swgoh.help client")
    }
}
