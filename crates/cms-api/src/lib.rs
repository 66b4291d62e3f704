//! Backend-independent access to CMS page content
//!
//! Pages fetched from a content backend are exposed as trees of
//! [`ContentNode`]s. A field is read with a path expression such as
//! `banners[2].image`, which is parsed, walked through the tree, matched
//! against the caller's locale preferences, and converted to a string based
//! on the field's declared type.
//!
//! ```text
//!   backend fetch (async) ──► merge (custom objects only) ──► ContentNode tree
//!                                                                  │
//!   "banners[2].image" ──► path ──► navigate ──► locale ──► field_type ──► Option<String>
//! ```
//!
//! Resolution is pure and synchronous: every failure reads as `None`.

pub mod config;
pub mod error;
pub mod field_type;
pub mod identifier;
pub mod locale;
pub mod merge;
pub mod navigate;
pub mod node;
pub mod page;
pub mod path;
pub mod service;

#[cfg(test)]
mod testing;

pub use config::{Backend, CmsConfig};
pub use error::{Error, Result};
pub use field_type::{ASSET_LINK, Conversion, FieldKind, FieldTypeDescriptor, stringify};
pub use identifier::CmsIdentifier;
pub use locale::{Locale, select_locale};
pub use merge::{compose, merge};
pub use navigate::find_node;
pub use node::{ContentNode, FieldValue};
pub use page::{CmsPage, resolve_field};
pub use path::{FieldPath, PathSegment, parse_path};
pub use service::{CmsService, fetch_page};
