/*
[INPUT]:  Completed HTTP exchanges (status, headers, body) or transport failures
[OUTPUT]: Decoded JSON body or a classified SwgohError
[POS]:    HTTP layer - response classification for data endpoints
[UPDATE]: When upstream failure signals or their priority change
*/

use reqwest::header::{HeaderMap, WARNING};
use reqwest::{Response, StatusCode};
use serde_json::Value;
use tracing::warn;

use crate::http::{Result, SwgohError};

/// Everything received for one call, read in full before classification
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn new(status: StatusCode, headers: HeaderMap, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            headers,
            body: body.into(),
        }
    }

    /// Read status, headers and body without failing on non-2xx statuses
    pub async fn read(response: Response) -> std::result::Result<Self, reqwest::Error> {
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await?.to_vec();
        Ok(Self {
            status,
            headers,
            body,
        })
    }

    /// Comma-separated items of every `warning` header, or `None` if absent
    pub fn warnings(&self) -> Option<Vec<String>> {
        let mut values = self.headers.get_all(WARNING).iter().peekable();
        values.peek()?;

        let warnings = values
            .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned())
            .flat_map(|value| {
                value
                    .split(',')
                    .map(|item| item.trim().to_string())
                    .filter(|item| !item.is_empty())
                    .collect::<Vec<_>>()
            })
            .collect();
        Some(warnings)
    }
}

/// Classify the outcome of a data-endpoint call.
///
/// Checked in order:
/// 1. transport failure → [`SwgohError::Transport`]
/// 2. `warning` header → [`SwgohError::UpstreamWarning`], even when the body is usable
/// 3. body is not JSON → [`SwgohError::MalformedResponse`]
/// 4. status other than 200, or an embedded `error`/`error_description` →
///    [`SwgohError::Api`]
/// 5. the parsed body
pub fn classify_response(
    outcome: std::result::Result<RawResponse, reqwest::Error>,
) -> Result<Value> {
    let raw = outcome?;
    let status = raw.status.as_u16();

    if let Some(warnings) = raw.warnings() {
        warn!(status, ?warnings, "upstream warning");
        return Err(SwgohError::UpstreamWarning { warnings });
    }

    let body: Value =
        serde_json::from_slice(&raw.body).map_err(|e| SwgohError::MalformedResponse {
            status,
            message: e.to_string(),
        })?;

    let (code, description) = embedded_error(&body);
    if raw.status != StatusCode::OK || code.is_some() || description.is_some() {
        warn!(status, ?code, ?description, "request rejected by upstream");
        return Err(SwgohError::Api {
            status,
            code,
            description,
        });
    }

    Ok(body)
}

fn embedded_error(body: &Value) -> (Option<String>, Option<String>) {
    let Some(object) = body.as_object() else {
        return (None, None);
    };
    let field = |name: &str| match object.get(name) {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(other) => Some(other.to_string()),
    };
    (field("error"), field("error_description"))
}
