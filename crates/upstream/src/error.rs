//! Upstream client error types.

use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

/// Errors surfaced by the upstream client.
///
/// Per-item lookup failures are never represented here — they are absorbed
/// into the item's `LookupResult`. These variants cover batch-level failures
/// only: the token exchange and empty input.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("token endpoint request failed: {0}")]
    TokenRequest(#[source] reqwest::Error),

    #[error("token exchange rejected ({status}): {detail}")]
    TokenRejected { status: StatusCode, detail: String },

    #[error("token response missing access_token field")]
    TokenMalformed,

    #[error("no valid queries in batch")]
    EmptyBatch,
}

impl UpstreamError {
    /// Upstream error detail for the response body: the upstream response
    /// body where one exists (parsed as JSON when possible), otherwise the
    /// error message.
    pub fn detail(&self) -> Value {
        match self {
            Self::TokenRejected { detail, .. } => match serde_json::from_str(detail) {
                Ok(value) => value,
                Err(_) => Value::String(detail.clone()),
            },
            other => Value::String(other.to_string()),
        }
    }
}
