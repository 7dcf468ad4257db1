use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Value;
use std::fmt;

use crate::transport::TransportError;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Everything that can go wrong while talking to the Airly API.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The client was constructed with unusable settings (e.g. an empty API key).
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// The request URL or headers could not be assembled.
    #[error("failed to build request: {0}")]
    RequestBuild(String),

    /// Connection, TLS, timeout or body-read failure.
    #[error("request failed: {0}")]
    Transport(#[source] TransportError),

    /// The API answered with a non-200 status.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// A 200 response whose body does not match the expected shape.
    #[error("failed to decode response from {url} at `{path}`: {source}")]
    Decode {
        url: String,
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// The API error carried by this value, if any.
    pub fn as_api(&self) -> Option<&ApiError> {
        match self {
            Error::Api(e) => Some(e),
            _ => None,
        }
    }
}

/// Error decoded from a non-200 response.
///
/// `Display` renders the message only, so callers that surface it to users
/// see exactly what the API said.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    pub status: StatusCode,
    /// Machine readable code such as `INSTALLATION_NOT_FOUND`.
    pub code: Option<String>,
    pub message: String,
    pub violations: Vec<Violation>,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ApiError {}

/// A single rejected request parameter.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Violation {
    #[serde(default)]
    pub parameter: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub rejected_value: Value,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ErrorEnvelope {
    #[serde(default)]
    error_code: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    details: Option<ErrorDetails>,
}

#[derive(Debug, Default, Deserialize)]
struct ErrorDetails {
    #[serde(default)]
    violations: Vec<Violation>,
}

fn fallback_message(status: StatusCode, what: &str) -> String {
    format!(
        "unexpected HTTP {} {} ({})",
        status.as_u16(),
        status.canonical_reason().unwrap_or("Unknown Status"),
        what
    )
}

/// Turns a non-200 response into an [`ApiError`]; never fails.
pub(crate) fn decode_api_error(status: StatusCode, body: &[u8]) -> ApiError {
    if body.iter().all(u8::is_ascii_whitespace) {
        return ApiError {
            status,
            code: None,
            message: fallback_message(status, "empty error"),
            violations: Vec::new(),
        };
    }

    let envelope = match serde_json::from_slice::<ErrorEnvelope>(body) {
        Ok(envelope) => envelope,
        Err(err) => {
            tracing::warn!(status = %status, len = body.len(), error = %err, "undecodable error body");
            return ApiError {
                status,
                code: None,
                message: fallback_message(
                    status,
                    &format!("undecodable error body, {} bytes", body.len()),
                ),
                violations: Vec::new(),
            };
        }
    };

    let message = match envelope.message {
        Some(m) if !m.is_empty() => m,
        _ => fallback_message(status, "empty error"),
    };

    ApiError {
        status,
        code: envelope.error_code.filter(|c| !c.is_empty()),
        message,
        violations: envelope.details.unwrap_or_default().violations,
    }
}
