//! Custom-objects backend
//!
//! Pages are untyped JSON documents kept as custom objects. A page's content
//! is composed from its own document and the documents of its dependencies,
//! and field types are inferred from the JSON values.

pub mod node;
pub mod page;
pub mod service;

pub use node::{JsonNode, JsonValue, infer_field_type};
pub use page::{CustomObjectPage, compose_custom_object};
pub use service::{CustomObjectCmsService, CustomObjectStore, InMemoryCustomObjectStore};
