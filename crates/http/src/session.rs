//! Session gate.
//!
//! Credentials are checked against the management API once, at login. Later
//! requests trust the cookie contents; a revoked token surfaces only when the
//! next listing call fails upstream.

use axum::extract::FromRequestParts;
use axum::http::HeaderMap;
use axum::http::request::Parts;
use durable_viewer_client::{ClientError, ListingClient};
use durable_viewer_core::Credentials;

use crate::api_error::ApiError;
use crate::cookies;

/// Credentials of the current request, decoded from its cookies.
///
/// Extracting a `Session` rejects the request with `401 Unauthorized` when
/// either cookie is missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session(pub Credentials);

impl<S> FromRequestParts<S> for Session
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        authorize(&parts.headers).map(Self)
    }
}

/// Resolves the request's session without calling the remote service.
///
/// # Errors
/// `ApiError::Unauthorized` if either credential cookie is missing or empty.
pub fn authorize(headers: &HeaderMap) -> Result<Credentials, ApiError> {
    cookies::decode(headers).complete().ok_or_else(ApiError::unauthorized)
}

/// Validates `candidate` with a single one-item listing request.
///
/// Any non-success status counts as bad credentials. A failure before a
/// response arrives is an internal error, so a network partition is not
/// reported as a wrong key.
///
/// # Errors
/// `ApiError::Unauthorized` when the probe is rejected, `ApiError::Internal`
/// when it cannot be sent.
pub async fn login(client: &ListingClient, candidate: &Credentials) -> Result<(), ApiError> {
    match client.probe(candidate).await {
        Ok(()) => {
            tracing::info!(account_id = %candidate.account_id, "login accepted");
            Ok(())
        },
        Err(ClientError::Upstream { code, status_text }) => {
            tracing::warn!(
                account_id = %candidate.account_id,
                code,
                status_text = %status_text,
                "login rejected by upstream"
            );
            Err(ApiError::Unauthorized("Invalid credentials".to_owned()))
        },
        Err(err) => Err(ApiError::Internal(anyhow::Error::new(err).context("login probe failed"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderValue, header};

    #[test]
    fn test_authorize_without_cookies_is_unauthorized() {
        let result = authorize(&HeaderMap::new());
        assert!(matches!(result, Err(ApiError::Unauthorized(ref msg)) if msg == "Unauthorized"));
    }

    #[test]
    fn test_authorize_requires_both_cookies() {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_static("apiKey=k"));
        assert!(authorize(&headers).is_err());
    }

    #[test]
    fn test_authorize_is_repeatable() {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_static("accountId=acct1; apiKey=k"));
        let first = authorize(&headers).unwrap();
        let second = authorize(&headers).unwrap();
        assert_eq!(first, second);
        assert_eq!(first, Credentials::new("acct1", "k"));
    }
}
