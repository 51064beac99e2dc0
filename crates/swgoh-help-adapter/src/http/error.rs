/*
[INPUT]:  Error sources (transport, sign-in, upstream headers, response bodies, serialization)
[OUTPUT]: Classified error types with status context and retry hints
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or changing response classification
*/

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the SWGOH.help adapter
#[derive(Error, Debug)]
pub enum SwgohError {
    /// Sign-in rejected by upstream (bad credentials or client id/secret)
    #[error("Login failed with HTTP status [{status}]")]
    Authentication { status: u16 },

    /// HTTP call could not be completed (DNS, connect, timeout, body read)
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Upstream flagged the call through a `warning` response header
    #[error("Upstream warning: {}", .warnings.join(", "))]
    UpstreamWarning { warnings: Vec<String> },

    /// Response body could not be decoded
    #[error("Malformed response (HTTP status [{status}]): {message}")]
    MalformedResponse { status: u16, message: String },

    /// Request rejected by upstream application logic
    #[error(
        "API error (HTTP status [{status}]): {}: {}",
        .code.as_deref().unwrap_or("unknown"),
        .description.as_deref().unwrap_or("no description")
    )]
    Api {
        status: u16,
        code: Option<String>,
        description: Option<String>,
    },

    /// Request payload could not be encoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl SwgohError {
    /// Check if the error is worth retrying with the same inputs
    pub fn is_retryable(&self) -> bool {
        matches!(self, SwgohError::Transport(_))
    }

    /// Check if error indicates a rejected sign-in
    pub fn is_auth_error(&self) -> bool {
        matches!(self, SwgohError::Authentication { .. })
    }

    /// HTTP status attached to the error, when one was received
    pub fn status(&self) -> Option<u16> {
        match self {
            SwgohError::Authentication { status }
            | SwgohError::MalformedResponse { status, .. }
            | SwgohError::Api { status, .. } => Some(*status),
            SwgohError::Transport(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Create an API error from a status code without embedded details
    pub fn api_error(status: StatusCode) -> Self {
        SwgohError::Api {
            status: status.as_u16(),
            code: None,
            description: None,
        }
    }
}

/// Result type alias for SWGOH.help operations
pub type Result<T> = std::result::Result<T, SwgohError>;
