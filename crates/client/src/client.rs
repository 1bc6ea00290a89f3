use durable_viewer_core::{Credentials, DurableObject, Namespace, PageEnvelope, ViewerConfig};
use reqwest::{Response, StatusCode, Url};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::ClientError;

/// Thin wrapper over the two read endpoints of the Durable Objects API.
///
/// Holds a single `reqwest::Client` so connections are reused across requests.
/// Credentials are passed per call; the client itself is account-agnostic.
pub struct ListingClient {
    pub(crate) client: reqwest::Client,
    pub(crate) base_url: Url,
    pub(crate) namespace_page_size: u32,
    pub(crate) object_list_limit: u32,
    pub(crate) max_pages: u32,
}

impl std::fmt::Debug for ListingClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListingClient")
            .field("base_url", &self.base_url.as_str())
            .field("namespace_page_size", &self.namespace_page_size)
            .field("object_list_limit", &self.object_list_limit)
            .field("max_pages", &self.max_pages)
            .finish_non_exhaustive()
    }
}

impl ListingClient {
    /// Creates a client for the API rooted at `config.api_base_url`.
    ///
    /// # Errors
    /// Returns an error if the base URL does not parse or the HTTP client
    /// cannot be built (TLS backend failure).
    pub fn new(config: &ViewerConfig) -> Result<Self, ClientError> {
        let base_url = Url::parse(&config.api_base_url)
            .map_err(|e| ClientError::InvalidUrl(format!("{}: {e}", config.api_base_url)))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidUrl(config.api_base_url.clone()));
        }
        let client = reqwest::Client::builder()
            .user_agent(concat!("durable-viewer/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ClientError::ClientInit(e.to_string()))?;
        Ok(Self {
            client,
            base_url,
            namespace_page_size: config.namespace_page_size,
            object_list_limit: config.object_list_limit,
            max_pages: config.max_pages,
        })
    }

    /// Checks that the credentials can list namespaces, fetching a single item.
    ///
    /// Only the status is inspected; the body is discarded.
    ///
    /// # Errors
    /// `Transport` if no response arrives, `Upstream` for any non-2xx status.
    pub async fn probe(&self, creds: &Credentials) -> Result<(), ClientError> {
        let url = self.namespaces_url(&creds.account_id)?;
        let response = self
            .client
            .get(url)
            .query(&[("page", 1_u32), ("per_page", 1_u32)])
            .bearer_auth(&creds.api_key)
            .send()
            .await?;
        ensure_success(response).map(drop)
    }

    /// Fetches one page of the account's namespaces.
    ///
    /// # Errors
    /// `Transport`, `Upstream` on a non-2xx status, or `Decode` when the body
    /// does not match the page envelope schema.
    pub async fn list_namespaces_page(
        &self,
        creds: &Credentials,
        page: u32,
        page_size: u32,
    ) -> Result<PageEnvelope<Namespace>, ClientError> {
        let url = self.namespaces_url(&creds.account_id)?;
        let request = self
            .client
            .get(url)
            .query(&[("page", page), ("per_page", page_size)])
            .bearer_auth(&creds.api_key);
        let response = ensure_success(request.send().await?)?;
        decode_body(response, "namespaces page").await
    }

    /// Lists the objects of one namespace in a single bounded call.
    ///
    /// The largest page the API allows is requested and trusted to hold the
    /// whole list. Only `result` is read; a missing one yields an empty list.
    ///
    /// # Errors
    /// Same as [`Self::list_namespaces_page`].
    pub async fn list_objects(
        &self,
        creds: &Credentials,
        namespace_id: &str,
    ) -> Result<Vec<DurableObject>, ClientError> {
        let url = self.endpoint(&[
            "accounts",
            creds.account_id.as_str(),
            "workers",
            "durable_objects",
            "namespaces",
            namespace_id,
            "objects",
        ])?;
        let request = self
            .client
            .get(url)
            .query(&[("limit", self.object_list_limit)])
            .bearer_auth(&creds.api_key);
        let response = ensure_success(request.send().await?)?;
        let list: ObjectList = decode_body(response, "objects list").await?;
        tracing::debug!(namespace_id, count = list.result.len(), "listed objects");
        Ok(list.result)
    }

    fn namespaces_url(&self, account_id: &str) -> Result<Url, ClientError> {
        self.endpoint(&["accounts", account_id, "workers", "durable_objects", "namespaces"])
    }

    /// Appends percent-encoded path segments to the base URL.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url = self.base_url.clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|()| ClientError::InvalidUrl(self.base_url.to_string()))?;
            path.pop_if_empty().extend(segments);
        }
        Ok(url)
    }
}

/// Objects response body. Its `result_info` is cursor-style and unused.
#[derive(Deserialize)]
struct ObjectList {
    #[serde(default)]
    result: Vec<DurableObject>,
}

fn ensure_success(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(upstream_error(status))
    }
}

fn upstream_error(status: StatusCode) -> ClientError {
    ClientError::Upstream {
        code: status.as_u16(),
        status_text: status.canonical_reason().unwrap_or("Unknown Status").to_owned(),
    }
}

async fn decode_body<T: DeserializeOwned>(
    response: Response,
    context: &str,
) -> Result<T, ClientError> {
    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|source| ClientError::Decode {
        context: format!("{context} (body: {})", truncate(&body, 200)),
        source,
    })
}

/// Truncates a string to the given maximum length at a char boundary.
fn truncate(s: &str, max_len: usize) -> &str {
    if s.len() <= max_len {
        s
    } else {
        let mut end = max_len;
        while end > 0 && !s.is_char_boundary(end) {
            end = end.saturating_sub(1);
        }
        s.get(..end).unwrap_or("")
    }
}
