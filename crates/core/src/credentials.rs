use std::fmt;

/// Account identifier and API token captured from a login form or a session cookie.
///
/// Both fields are opaque. The pair is never stored server-side: the browser's
/// cookies are the only place it lives between requests.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub account_id: String,
    pub api_key: String,
}

impl Credentials {
    #[must_use]
    pub fn new(account_id: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self { account_id: account_id.into(), api_key: api_key.into() }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("account_id", &self.account_id)
            .field("api_key", &"***")
            .finish()
    }
}
