//! Page lookup over an entry fetcher

use async_trait::async_trait;
use cms_api::config::{EntriesConfig, MAX_INCLUDE_DEPTH};
use cms_api::{CmsService, Error, Locale, Result};

use crate::model::Entry;
use crate::page::EntryPage;

/// Locale value requesting every locale variant of an entry.
pub const ALL_LOCALES: &str = "*";

/// A query for the entries of one content type whose key field equals a
/// given value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryQuery {
    pub content_type: String,
    /// Field compared against `key`, as `fields.<name>`
    pub query_field: String,
    pub key: String,
    /// First preferred locale, or [`ALL_LOCALES`]
    pub locale: String,
    /// Levels of linked entries to resolve
    pub include: u8,
}

impl EntryQuery {
    /// Name of the key field without its `fields.` prefix.
    pub fn field_name(&self) -> &str {
        self.query_field
            .strip_prefix("fields.")
            .unwrap_or(&self.query_field)
    }
}

/// Source of entries, such as a delivery API client.
#[async_trait]
pub trait EntryFetcher: Send + Sync {
    async fn fetch_entries(&self, query: &EntryQuery) -> Result<Vec<Entry>>;
}

/// [`CmsService`] that finds a page entry by the value of its key field.
#[derive(Debug, Clone)]
pub struct EntryCmsService<F> {
    fetcher: F,
    page_type: String,
    page_query_field: String,
    include: u8,
}

impl<F: EntryFetcher> EntryCmsService<F> {
    pub fn new(
        fetcher: F,
        page_type: impl Into<String>,
        page_query_field: impl Into<String>,
    ) -> Self {
        Self {
            fetcher,
            page_type: page_type.into(),
            page_query_field: page_query_field.into(),
            include: MAX_INCLUDE_DEPTH,
        }
    }

    pub fn from_config(fetcher: F, config: &EntriesConfig) -> Self {
        Self::new(fetcher, &config.page_type, &config.page_query_field)
            .with_include(config.include)
    }

    /// Set the number of link levels to resolve, capped at
    /// [`MAX_INCLUDE_DEPTH`].
    pub fn with_include(mut self, include: u8) -> Self {
        self.include = include.min(MAX_INCLUDE_DEPTH);
        self
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    fn query(&self, page_key: &str, locales: &[Locale]) -> EntryQuery {
        EntryQuery {
            content_type: self.page_type.clone(),
            query_field: format!("fields.{}", self.page_query_field),
            key: page_key.to_string(),
            locale: locales
                .first()
                .map_or_else(|| ALL_LOCALES.to_string(), |l| l.tag().to_string()),
            include: self.include,
        }
    }
}

#[async_trait]
impl<F: EntryFetcher> CmsService for EntryCmsService<F> {
    type Page = EntryPage;

    async fn page(&self, page_key: &str, locales: &[Locale]) -> Result<Option<EntryPage>> {
        let query = self.query(page_key, locales);
        tracing::debug!(?query, "Querying page entries");

        let mut entries = self
            .fetcher
            .fetch_entries(&query)
            .await
            .map_err(|e| match e {
                Error::Fetch { .. } => e,
                other => Error::fetch(page_key, other.to_string()),
            })?;

        match entries.len() {
            0 => {
                tracing::debug!(page_key, "No page entry found");
                Ok(None)
            }
            1 => Ok(entries
                .pop()
                .map(|entry| EntryPage::new(entry, locales.to_vec()))),
            count => Err(Error::NonUniquePage {
                page_key: page_key.to_string(),
                count,
            }),
        }
    }
}

/// Fetcher over a fixed set of entries.
#[derive(Debug, Clone, Default)]
pub struct InMemoryEntryFetcher {
    entries: Vec<Entry>,
}

impl InMemoryEntryFetcher {
    pub fn new(entries: Vec<Entry>) -> Self {
        Self { entries }
    }

    pub fn insert(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    fn matches(entry: &Entry, query: &EntryQuery) -> bool {
        if entry.content_type.id != query.content_type {
            return false;
        }
        let field = query.field_name();
        let key = Some(query.key.as_str());
        if query.locale == ALL_LOCALES {
            return entry.fields.get(field).is_some_and(|variants| {
                variants.values().any(|value| value.to_text().as_deref() == key)
            });
        }
        entry
            .value_in(field, &query.locale)
            .or_else(|| entry.single_value(field))
            .is_some_and(|value| value.to_text().as_deref() == key)
    }
}

#[async_trait]
impl EntryFetcher for InMemoryEntryFetcher {
    async fn fetch_entries(&self, query: &EntryQuery) -> Result<Vec<Entry>> {
        Ok(self
            .entries
            .iter()
            .filter(|entry| Self::matches(entry, query))
            .cloned()
            .collect())
    }
}
