//! Shared constants for durable-viewer.

/// Default base URL of the Cloudflare v4 management API.
pub const DEFAULT_API_BASE_URL: &str = "https://api.cloudflare.com/client/v4";

/// Largest `per_page` the namespaces endpoint accepts.
pub const MAX_NAMESPACE_PAGE_SIZE: u32 = 100;

/// Largest `limit` the objects endpoint accepts in a single call.
pub const MAX_OBJECT_LIST_LIMIT: u32 = 10_000;

/// Default hard cap on pages fetched by one namespace aggregation.
pub const DEFAULT_MAX_PAGES: u32 = 1000;

/// Default session cookie lifetime (24 hours).
pub const DEFAULT_SESSION_MAX_AGE_SECS: u64 = 86_400;

/// Cookie carrying the account identifier.
pub const ACCOUNT_ID_COOKIE: &str = "accountId";

/// Cookie carrying the API token.
pub const API_KEY_COOKIE: &str = "apiKey";
