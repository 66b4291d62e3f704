//! Pages composed from custom objects
//!
//! A page custom object keeps its content at `value.content`. Shared content
//! is attached as references in `value.dependencies`; once expanded each
//! dependency is a custom object of its own, whose content is merged over
//! the page content in order:
//!
//! ```json
//! {
//!   "container": "co-cms-pages",
//!   "key": "home",
//!   "value": {
//!     "content": { "title": "Home" },
//!     "dependencies": [
//!       { "obj": { "value": { "content": { "footer": "(c) ACME" } } } }
//!     ]
//!   }
//! }
//! ```

use cms_api::{CmsPage, Error, Locale, Result, compose, resolve_field};
use serde_json::Value;

use crate::node::JsonNode;

const CONTENT_POINTER: &str = "/value/content";
const DEPENDENCIES_POINTER: &str = "/value/dependencies";
const DEPENDENCY_CONTENT_POINTER: &str = "/obj/value/content";

/// Compose the page document of a custom object with its dependencies.
pub fn compose_custom_object(custom_object: &Value) -> Result<Value> {
    let content = custom_object
        .pointer(CONTENT_POINTER)
        .filter(|content| content.is_object())
        .ok_or_else(|| Error::invalid_document("custom object has no content object"))?;

    let overrides = match custom_object.pointer(DEPENDENCIES_POINTER) {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(dependencies)) => dependencies
            .iter()
            .filter_map(|dependency| dependency.pointer(DEPENDENCY_CONTENT_POINTER))
            .collect(),
        Some(other) => {
            return Err(Error::invalid_document(format!(
                "custom object dependencies must be an array, found {other}"
            )));
        }
    };

    tracing::debug!(dependencies = overrides.len(), "Composing custom object");
    Ok(compose(content, overrides))
}

/// A page over a composed JSON document.
#[derive(Debug, Clone)]
pub struct CustomObjectPage {
    document: Value,
    locales: Vec<Locale>,
}

impl CustomObjectPage {
    /// Wrap an already composed document, which must be an object.
    pub fn new(document: Value, locales: Vec<Locale>) -> Result<Self> {
        if !document.is_object() {
            return Err(Error::invalid_document("page content must be an object"));
        }
        Ok(Self { document, locales })
    }

    pub fn from_custom_object(custom_object: &Value, locales: Vec<Locale>) -> Result<Self> {
        Self::new(compose_custom_object(custom_object)?, locales)
    }

    pub fn document(&self) -> &Value {
        &self.document
    }

    pub fn locales(&self) -> &[Locale] {
        &self.locales
    }
}

impl CmsPage for CustomObjectPage {
    fn field(&self, path: &str) -> Option<String> {
        let root = JsonNode::new(&self.document)?;
        resolve_field(root, &self.locales, path)
    }
}
