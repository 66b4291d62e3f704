//! CmsService trait: asynchronous page lookup

use std::time::Duration;

use async_trait::async_trait;

use crate::error::{Error, Result};
use crate::locale::Locale;
use crate::page::CmsPage;

/// A service providing access to CMS pages.
///
/// Fetching is the only asynchronous step; once a page is returned all field
/// reads on it are synchronous.
#[async_trait]
pub trait CmsService: Send + Sync {
    type Page: CmsPage + Send;

    /// Retrieve the page identified by `page_key`, with its content
    /// localized for the first of `locales` it is defined for.
    ///
    /// Returns `Ok(None)` when no such page exists, and an error when the
    /// backend could not be queried or the key is ambiguous.
    async fn page(&self, page_key: &str, locales: &[Locale]) -> Result<Option<Self::Page>>;
}

/// Fetch a page, giving up after `timeout` when one is set.
pub async fn fetch_page<S>(
    service: &S,
    page_key: &str,
    locales: &[Locale],
    timeout: Option<Duration>,
) -> Result<Option<S::Page>>
where
    S: CmsService + ?Sized,
{
    tracing::debug!(page_key, ?locales, ?timeout, "Fetching CMS page");
    match timeout {
        Some(limit) => tokio::time::timeout(limit, service.page(page_key, locales))
            .await
            .map_err(|_| Error::Timeout {
                page_key: page_key.to_string(),
                millis: u64::try_from(limit.as_millis()).unwrap_or(u64::MAX),
            })?,
        None => service.page(page_key, locales).await,
    }
}
