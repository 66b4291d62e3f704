//! Field type metadata and conversion of raw values to text
//!
//! Backends with a typed schema declare a [`FieldTypeDescriptor`] for every
//! field. The descriptor decides how a raw value is projected to a string:
//! directly (scalars), through the URL of a referenced asset, or not at all.
//!
//! Type names follow the Contentful content model (`Symbol`, `Link`,
//! `Array`, ...), and [`FieldTypeDefinition`] deserializes its field shape:
//!
//! ```json
//! { "type": "Array", "items": { "type": "Link", "linkType": "Asset" } }
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::node::FieldValue;

/// Link kind whose values project to their URL.
pub const ASSET_LINK: &str = "Asset";

/// Declared kind of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Boolean,
    Date,
    Integer,
    Number,
    Symbol,
    Text,
    Location,
    /// Reference to another document (an asset or an entry)
    Link,
    /// List of values described by the element kind
    Array,
}

impl FieldKind {
    /// Kinds whose values have a direct textual form.
    pub fn is_directly_stringifiable(&self) -> bool {
        !matches!(self, FieldKind::Link | FieldKind::Array)
    }

    /// Name used in content type definitions.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Boolean => "Boolean",
            FieldKind::Date => "Date",
            FieldKind::Integer => "Integer",
            FieldKind::Number => "Number",
            FieldKind::Symbol => "Symbol",
            FieldKind::Text => "Text",
            FieldKind::Location => "Location",
            FieldKind::Link => "Link",
            FieldKind::Array => "Array",
        }
    }
}

impl FromStr for FieldKind {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "Boolean" => Ok(FieldKind::Boolean),
            "Date" => Ok(FieldKind::Date),
            "Integer" => Ok(FieldKind::Integer),
            "Number" => Ok(FieldKind::Number),
            "Symbol" => Ok(FieldKind::Symbol),
            "Text" => Ok(FieldKind::Text),
            "Location" => Ok(FieldKind::Location),
            "Link" => Ok(FieldKind::Link),
            "Array" => Ok(FieldKind::Array),
            other => Err(Error::invalid_document(format!(
                "unsupported field type {other:?}"
            ))),
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a value of a given field is turned into a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conversion {
    /// Canonical text of the value itself
    Direct,
    /// URL of the referenced asset
    AssetUrl,
    /// No string projection
    Unsupported,
}

/// Declared type of a field.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldTypeDescriptor {
    pub kind: FieldKind,
    /// Kind of the elements when `kind` is `Array`
    pub element_kind: Option<FieldKind>,
    /// Link kind of the elements when they are links
    pub element_link_kind: Option<String>,
    /// Link kind when `kind` is `Link` (e.g., "Asset", "Entry")
    pub link_kind: Option<String>,
}

impl FieldTypeDescriptor {
    /// A descriptor for a non-link, non-array kind.
    pub fn scalar(kind: FieldKind) -> Self {
        Self {
            kind,
            element_kind: None,
            element_link_kind: None,
            link_kind: None,
        }
    }

    /// A link to documents of `link_kind`.
    pub fn link(link_kind: impl Into<String>) -> Self {
        Self {
            kind: FieldKind::Link,
            element_kind: None,
            element_link_kind: None,
            link_kind: Some(link_kind.into()),
        }
    }

    /// An array of `element_kind` values.
    pub fn array_of(element_kind: FieldKind) -> Self {
        Self {
            kind: FieldKind::Array,
            element_kind: Some(element_kind),
            element_link_kind: None,
            link_kind: None,
        }
    }

    /// An array of links to documents of `link_kind`.
    pub fn array_of_links(link_kind: impl Into<String>) -> Self {
        Self {
            kind: FieldKind::Array,
            element_kind: Some(FieldKind::Link),
            element_link_kind: Some(link_kind.into()),
            link_kind: None,
        }
    }

    pub fn is_array(&self) -> bool {
        self.kind == FieldKind::Array
    }

    /// Conversion applied to a value of this field, or to one element of it
    /// when the field is an array.
    ///
    /// Arrays are only looked through one level: an array whose elements are
    /// arrays has no conversion.
    pub fn conversion(&self) -> Conversion {
        match self.kind {
            FieldKind::Array => {
                scalar_conversion(self.element_kind, self.element_link_kind.as_deref())
            }
            kind => scalar_conversion(Some(kind), self.link_kind.as_deref()),
        }
    }
}

fn scalar_conversion(kind: Option<FieldKind>, link_kind: Option<&str>) -> Conversion {
    match kind {
        Some(kind) if kind.is_directly_stringifiable() => Conversion::Direct,
        Some(FieldKind::Link) if link_kind == Some(ASSET_LINK) => Conversion::AssetUrl,
        _ => Conversion::Unsupported,
    }
}

/// Convert a raw value (or an array element) to its canonical string.
///
/// Returns `None` when the descriptor has no string projection, or when the
/// value does not provide one (e.g., an asset without URL).
///
/// # Examples
///
/// ```
/// use cms_api::field_type::{stringify, FieldKind, FieldTypeDescriptor};
/// use serde_json::json;
///
/// # use cms_api::FieldValue;
/// # struct Json<'a>(&'a serde_json::Value);
/// # impl FieldValue for Json<'_> {
/// #     fn is_array(&self) -> bool { self.0.is_array() }
/// #     fn element(&self, _: usize) -> Option<Self> { None }
/// #     fn text(&self) -> Option<String> { self.0.as_str().map(String::from) }
/// #     fn asset_url(&self) -> Option<String> { None }
/// # }
/// let value = json!("Hello");
/// let text = FieldTypeDescriptor::scalar(FieldKind::Text);
/// assert_eq!(stringify(&Json(&value), &text).as_deref(), Some("Hello"));
///
/// let entry_link = FieldTypeDescriptor::link("Entry");
/// assert_eq!(stringify(&Json(&value), &entry_link), None);
/// ```
pub fn stringify<V: FieldValue>(value: &V, descriptor: &FieldTypeDescriptor) -> Option<String> {
    match descriptor.conversion() {
        Conversion::Direct => value.text(),
        Conversion::AssetUrl => value.asset_url(),
        Conversion::Unsupported => None,
    }
}

/// Field type as written in a content type definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldTypeDefinition {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<ItemsDefinition>,
}

/// Element type of an `Array` field definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemsDefinition {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_type: Option<String>,
}

impl TryFrom<&FieldTypeDefinition> for FieldTypeDescriptor {
    type Error = Error;

    /// Fails for kinds outside [`FieldKind`]. An unknown element kind is kept
    /// as `element_kind: None`, which converts to nothing.
    fn try_from(definition: &FieldTypeDefinition) -> std::result::Result<Self, Self::Error> {
        let kind: FieldKind = definition.kind.parse()?;
        let (element_kind, element_link_kind) = match (&definition.items, kind) {
            (Some(items), FieldKind::Array) => {
                (items.kind.parse().ok(), items.link_type.clone())
            }
            _ => (None, None),
        };
        Ok(Self {
            kind,
            element_kind,
            element_link_kind,
            link_kind: definition.link_type.clone(),
        })
    }
}
