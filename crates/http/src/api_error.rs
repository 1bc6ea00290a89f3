//! Typed API error for HTTP handlers.
//!
//! Every failure is settled at the handler boundary and turned into a status
//! code with a plain-text body. Nothing is retried.

use axum::http::StatusCode;
use axum::http::header::InvalidHeaderValue;
use axum::response::{IntoResponse, Response};
use durable_viewer_client::ClientError;

/// API error with HTTP status code and human-readable message.
///
/// `Internal` logs the real error server-side and returns a static message to
/// the client.
#[derive(Debug)]
pub enum ApiError {
    /// 400 Bad Request: a required input is missing.
    BadRequest(String),
    /// 401 Unauthorized: no usable session, or the login probe was rejected.
    Unauthorized(String),
    /// 500 Internal Server Error carrying the upstream status text.
    Upstream(String),
    /// 500 Internal Server Error. Details logged, not exposed.
    Internal(anyhow::Error),
}

impl ApiError {
    #[must_use]
    pub fn unauthorized() -> Self {
        Self::Unauthorized("Unauthorized".to_owned())
    }

    /// Maps a listing failure, prefixing upstream rejections with `context`.
    #[must_use]
    pub fn from_listing(context: &str, err: ClientError) -> Self {
        match err {
            ClientError::Upstream { code, status_text } => {
                tracing::warn!(code, status_text = %status_text, "{context}");
                Self::Upstream(format!("{context}: {status_text}"))
            },
            other => Self::Internal(anyhow::Error::new(other).context(context.to_owned())),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            Self::Upstream(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            Self::Internal(err) => {
                tracing::error!(error = ?err, "internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_owned())
            },
        };
        (status, message).into_response()
    }
}

impl From<InvalidHeaderValue> for ApiError {
    fn from(err: InvalidHeaderValue) -> Self {
        Self::Internal(anyhow::Error::new(err).context("building Set-Cookie header"))
    }
}
