//! Typed, localized entries backend
//!
//! Entries declare their fields through a content type. Every field holds
//! one value per locale, and links to assets and other entries are resolved
//! into the document before it reaches this crate.
//!
//! A page is found by querying an [`EntryFetcher`] for the entries of the
//! page content type whose key field equals the page key.

pub mod decode;
pub mod model;
pub mod node;
pub mod page;
pub mod service;

pub use model::{Asset, ContentDate, ContentType, Entry, EntryValue, FieldDefinition, Location};
pub use node::EntryNode;
pub use page::EntryPage;
pub use service::{ALL_LOCALES, EntryCmsService, EntryFetcher, EntryQuery, InMemoryEntryFetcher};
