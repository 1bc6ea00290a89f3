//! Runtime configuration, read from `DURABLE_VIEWER_*` environment variables.

use std::time::Duration;

use crate::constants::{
    DEFAULT_API_BASE_URL, DEFAULT_MAX_PAGES, DEFAULT_SESSION_MAX_AGE_SECS, MAX_NAMESPACE_PAGE_SIZE,
    MAX_OBJECT_LIST_LIMIT,
};
use crate::env_config::{non_blank, parse_with_default};

pub const API_URL_VAR: &str = "DURABLE_VIEWER_API_URL";
pub const PAGE_SIZE_VAR: &str = "DURABLE_VIEWER_PAGE_SIZE";
pub const OBJECT_LIMIT_VAR: &str = "DURABLE_VIEWER_OBJECT_LIMIT";
pub const MAX_PAGES_VAR: &str = "DURABLE_VIEWER_MAX_PAGES";
pub const SESSION_MAX_AGE_VAR: &str = "DURABLE_VIEWER_SESSION_MAX_AGE_SECS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerConfig {
    /// Management API base URL, without a trailing slash.
    pub api_base_url: String,
    /// `per_page` sent when listing namespaces.
    pub namespace_page_size: u32,
    /// `limit` sent when listing objects.
    pub object_list_limit: u32,
    /// Hard cap on pages fetched by one namespace aggregation.
    pub max_pages: u32,
    /// `Max-Age` for session cookies; `None` issues browser-session cookies.
    pub session_max_age: Option<Duration>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            namespace_page_size: MAX_NAMESPACE_PAGE_SIZE,
            object_list_limit: MAX_OBJECT_LIST_LIMIT,
            max_pages: DEFAULT_MAX_PAGES,
            session_max_age: Some(Duration::from_secs(DEFAULT_SESSION_MAX_AGE_SECS)),
        }
    }
}

impl ViewerConfig {
    /// Build the configuration from the environment, falling back to defaults.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build the configuration from `lookup`, which maps a variable name to its raw value.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let parse = |var: &str, default: u32| parse_with_default(var, lookup(var).as_deref(), default);
        let api_base_url =
            non_blank(lookup(API_URL_VAR)).unwrap_or_else(|| DEFAULT_API_BASE_URL.to_owned());
        let max_age_secs: u64 = parse_with_default(
            SESSION_MAX_AGE_VAR,
            lookup(SESSION_MAX_AGE_VAR).as_deref(),
            DEFAULT_SESSION_MAX_AGE_SECS,
        );
        Self {
            api_base_url: api_base_url.trim_end_matches('/').to_owned(),
            namespace_page_size: parse(PAGE_SIZE_VAR, MAX_NAMESPACE_PAGE_SIZE)
                .clamp(1, MAX_NAMESPACE_PAGE_SIZE),
            object_list_limit: parse(OBJECT_LIMIT_VAR, MAX_OBJECT_LIST_LIMIT)
                .clamp(1, MAX_OBJECT_LIST_LIMIT),
            max_pages: parse(MAX_PAGES_VAR, DEFAULT_MAX_PAGES).max(1),
            session_max_age: (max_age_secs > 0).then(|| Duration::from_secs(max_age_secs)),
        }
    }

    #[must_use]
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into().trim_end_matches('/').to_owned();
        self
    }
}
