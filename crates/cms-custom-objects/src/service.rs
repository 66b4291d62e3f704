//! Page lookup over a custom-object store

use async_trait::async_trait;
use cms_api::config::CustomObjectsConfig;
use cms_api::{CmsService, Error, Locale, Result};
use serde_json::Value;

use crate::page::CustomObjectPage;

/// Storage of custom objects, addressed by container and key.
#[async_trait]
pub trait CustomObjectStore: Send + Sync {
    /// Custom objects stored under `key` in `container`, with their
    /// `value.dependencies` expanded.
    async fn find(&self, container: &str, key: &str) -> Result<Vec<Value>>;
}

/// [`CmsService`] over the custom objects of one container.
#[derive(Debug, Clone)]
pub struct CustomObjectCmsService<S> {
    store: S,
    container: String,
}

impl<S: CustomObjectStore> CustomObjectCmsService<S> {
    pub fn new(store: S, container: impl Into<String>) -> Self {
        Self {
            store,
            container: container.into(),
        }
    }

    pub fn from_config(store: S, config: &CustomObjectsConfig) -> Self {
        Self::new(store, &config.container)
    }

    pub fn container(&self) -> &str {
        &self.container
    }
}

#[async_trait]
impl<S: CustomObjectStore> CmsService for CustomObjectCmsService<S> {
    type Page = CustomObjectPage;

    async fn page(&self, page_key: &str, locales: &[Locale]) -> Result<Option<CustomObjectPage>> {
        let objects = self
            .store
            .find(&self.container, page_key)
            .await
            .map_err(|e| match e {
                Error::Fetch { .. } => e,
                other => Error::fetch(page_key, other.to_string()),
            })?;

        if objects.len() > 1 {
            tracing::debug!(page_key, count = objects.len(), "Using first of several custom objects");
        }
        objects
            .first()
            .map(|object| CustomObjectPage::from_custom_object(object, locales.to_vec()))
            .transpose()
    }
}

/// Store over a fixed set of custom objects.
///
/// Objects are matched on their top-level `container` and `key` fields.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCustomObjectStore {
    objects: Vec<Value>,
}

impl InMemoryCustomObjectStore {
    pub fn new(objects: Vec<Value>) -> Self {
        Self { objects }
    }

    pub fn insert(&mut self, object: Value) {
        self.objects.push(object);
    }
}

#[async_trait]
impl CustomObjectStore for InMemoryCustomObjectStore {
    async fn find(&self, container: &str, key: &str) -> Result<Vec<Value>> {
        Ok(self
            .objects
            .iter()
            .filter(|object| {
                object.get("container").and_then(Value::as_str) == Some(container)
                    && object.get("key").and_then(Value::as_str) == Some(key)
            })
            .cloned()
            .collect())
    }
}
