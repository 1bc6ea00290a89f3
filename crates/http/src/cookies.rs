//! Session cookie codec.
//!
//! The credential pair travels as two independent cookies, `accountId` and
//! `apiKey`, each `Path=/; HttpOnly; SameSite=Strict`. Values are the raw
//! credential strings, so only RFC 6265 cookie-octets are accepted: a `;`,
//! `,`, quote, backslash or whitespace would be cut off when read back.
//!
//! Parsing is permissive on purpose: entries without `=` and unknown names are
//! skipped instead of failing the request. The login probe, not this parser,
//! decides whether credentials are valid.

use std::time::Duration;

use axum::http::header::{self, HeaderMap, HeaderValue, InvalidHeaderValue};
use axum_extra::extract::cookie::{Cookie, SameSite};
use durable_viewer_core::{ACCOUNT_ID_COOKIE, API_KEY_COOKIE, Credentials};

/// Whatever credential cookies a request carried. Either field may be missing.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CookieCredentials {
    pub account_id: Option<String>,
    pub api_key: Option<String>,
}

impl CookieCredentials {
    /// The full pair, or `None` if either cookie is absent.
    #[must_use]
    pub fn complete(self) -> Option<Credentials> {
        match (self.account_id, self.api_key) {
            (Some(account_id), Some(api_key)) => Some(Credentials { account_id, api_key }),
            _ => None,
        }
    }
}

/// Reads the credential cookies from every `Cookie` header of a request.
///
/// The first non-empty occurrence of each name wins.
#[must_use]
pub fn decode(headers: &HeaderMap) -> CookieCredentials {
    let mut found = CookieCredentials::default();
    for raw in headers.get_all(header::COOKIE) {
        let Ok(raw) = raw.to_str() else {
            continue;
        };
        for cookie in Cookie::split_parse(raw).filter_map(Result::ok) {
            let slot = match cookie.name() {
                ACCOUNT_ID_COOKIE => &mut found.account_id,
                API_KEY_COOKIE => &mut found.api_key,
                _ => continue,
            };
            if slot.is_none() && !cookie.value().is_empty() {
                *slot = Some(cookie.value().to_owned());
            }
        }
    }
    found
}

/// Whether `value` can be stored as a raw cookie value and read back intact.
#[must_use]
pub fn is_cookie_safe(value: &str) -> bool {
    value.bytes().all(|b| matches!(b, 0x21 | 0x23..=0x2B | 0x2D..=0x3A | 0x3C..=0x5B | 0x5D..=0x7E))
}

/// `Set-Cookie` values that start a session for `creds`.
///
/// # Errors
/// Fails if a credential contains bytes that cannot appear in a header.
pub fn encode(
    creds: &Credentials,
    max_age: Option<Duration>,
) -> Result<[HeaderValue; 2], InvalidHeaderValue> {
    let lifetime = max_age.map(to_cookie_duration);
    Ok([
        header_value(session_cookie(ACCOUNT_ID_COOKIE, creds.account_id.clone(), lifetime))?,
        header_value(session_cookie(API_KEY_COOKIE, creds.api_key.clone(), lifetime))?,
    ])
}

/// `Set-Cookie` values that clear both credential cookies immediately.
///
/// # Errors
/// Only if the cookie builder emits invalid header bytes.
pub fn encode_expired() -> Result<[HeaderValue; 2], InvalidHeaderValue> {
    let now = Some(time::Duration::ZERO);
    Ok([
        header_value(session_cookie(ACCOUNT_ID_COOKIE, String::new(), now))?,
        header_value(session_cookie(API_KEY_COOKIE, String::new(), now))?,
    ])
}

fn session_cookie(
    name: &'static str,
    value: String,
    max_age: Option<time::Duration>,
) -> Cookie<'static> {
    let mut builder = Cookie::build((name, value))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Strict);
    if let Some(max_age) = max_age {
        builder = builder.max_age(max_age);
    }
    builder.build()
}

fn header_value(cookie: Cookie<'_>) -> Result<HeaderValue, InvalidHeaderValue> {
    HeaderValue::from_str(&cookie.to_string())
}

fn to_cookie_duration(age: Duration) -> time::Duration {
    time::Duration::seconds(i64::try_from(age.as_secs()).unwrap_or(i64::MAX))
}
