//! Typed error enum for the listing client.

use thiserror::Error;

/// Errors from Durable Objects listing calls.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never produced a response (DNS, connect, TLS, body read).
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("upstream returned HTTP {code}: {status_text}")]
    Upstream { code: u16, status_text: String },
    #[error("JSON parse error in {context}: {source}")]
    Decode {
        context: String,
        #[source]
        source: serde_json::Error,
    },
    /// The upstream broke the pagination contract.
    #[error("pagination protocol violation: {0}")]
    Protocol(String),
    #[error("invalid API URL: {0}")]
    InvalidUrl(String),
    #[error("client initialization failed: {0}")]
    ClientInit(String),
}

impl ClientError {
    /// Status text reported by the upstream, if this is an upstream rejection.
    #[must_use]
    pub fn status_text(&self) -> Option<&str> {
        match self {
            Self::Upstream { status_text, .. } => Some(status_text),
            _ => None,
        }
    }
}
