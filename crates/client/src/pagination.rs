//! Materializes a paginated collection into one ordered list.

use std::future::Future;

use durable_viewer_core::{Credentials, Namespace, PageEnvelope};

use crate::client::ListingClient;
use crate::error::ClientError;

/// Fetches pages 1, 2, 3, ... until the upstream reports the last one.
///
/// Pages are requested strictly one after another because each continuation
/// decision depends on the previous page's `result_info`. A page whose
/// `result_info` is missing or lacks `page`/`total_pages` ends the collection. Items keep upstream order.
///
/// The loop stops with `ClientError::Protocol` when the upstream page counter
/// fails to advance, or when more pages would be needed than the first page's
/// `total_pages` or `max_pages` allow. Any error discards the items collected
/// so far.
///
/// # Errors
/// The first error returned by `fetch_page`, or a protocol violation.
pub async fn collect_pages<T, F, Fut>(max_pages: u32, mut fetch_page: F) -> Result<Vec<T>, ClientError>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<PageEnvelope<T>, ClientError>>,
{
    let mut items = Vec::new();
    let mut page: u32 = 1;
    let mut page_limit = max_pages.max(1);
    let mut last_seen: Option<u32> = None;

    loop {
        let envelope = fetch_page(page).await?;
        let has_more = envelope.has_more();
        let info = envelope.result_info;
        items.extend(envelope.result);

        let Some((info_page, total_pages)) = info.and_then(|info| info.position()) else {
            break;
        };
        if let Some(previous) = last_seen {
            if info_page <= previous {
                return Err(ClientError::Protocol(format!(
                    "page counter did not advance: got page {info_page} after page {previous}"
                )));
            }
        }
        last_seen = Some(info_page);
        if page == 1 {
            page_limit = page_limit.min(total_pages.max(1));
        }
        if !has_more {
            break;
        }
        if page >= page_limit {
            return Err(ClientError::Protocol(format!(
                "upstream still reports more pages after {page} (limit {page_limit})"
            )));
        }
        page += 1;
    }

    Ok(items)
}

impl ListingClient {
    /// Lists every namespace in the account, walking all pages in order.
    ///
    /// # Errors
    /// Any client error from a page fetch, or a pagination protocol violation.
    /// Partial results are never returned.
    pub async fn fetch_all_namespaces(
        &self,
        creds: &Credentials,
    ) -> Result<Vec<Namespace>, ClientError> {
        let page_size = self.namespace_page_size;
        let namespaces = collect_pages(self.max_pages, move |page| async move {
            let envelope = self.list_namespaces_page(creds, page, page_size).await?;
            tracing::debug!(page, items = envelope.result.len(), "fetched namespaces page");
            Ok::<_, ClientError>(envelope)
        })
        .await?;
        tracing::debug!(account_id = %creds.account_id, total = namespaces.len(), "listed namespaces");
        Ok(namespaces)
    }
}
