//! Backend-independent view of a content tree
//!
//! Each backend exposes its documents through [`ContentNode`] and their raw
//! field values through [`FieldValue`]. Implementations are cheap handles
//! (typically a reference wrapped in a `Copy` struct), so lookups hand back
//! owned handles rather than borrows tied to `&self`.

use crate::field_type::FieldTypeDescriptor;

/// A traversable unit of content.
pub trait ContentNode: Sized {
    /// Raw value of a field as stored by the backend.
    type Value: FieldValue;

    /// Whether the node has a field with this name.
    fn has_field(&self, name: &str) -> bool;

    /// The node held by field `name`, if that field's value is a node.
    fn child(&self, name: &str) -> Option<Self>;

    /// The node at `index` of the array held by field `name`.
    ///
    /// Returns `None` when the field is missing, not an array, too short, or
    /// when the element is not a node.
    fn child_at(&self, name: &str, index: usize) -> Option<Self>;

    /// Declared type of field `name`.
    fn field_type(&self, name: &str) -> Option<FieldTypeDescriptor>;

    /// Locale tags for which field `name` has a variant.
    ///
    /// `None` means the backend does not localize this field per locale; the
    /// field then has a single representation read with `locale: None`.
    fn field_locales(&self, name: &str) -> Option<Vec<String>>;

    /// Raw value of field `name`.
    ///
    /// With `Some(locale)` the variant stored for that locale is returned;
    /// with `None` the backend's single representation is returned.
    fn field_value(&self, name: &str, locale: Option<&str>) -> Option<Self::Value>;
}

/// A raw field value that can be indexed and projected to text.
pub trait FieldValue: Sized {
    /// Whether the value is array-shaped.
    fn is_array(&self) -> bool;

    /// The element at `index` when the value is an array.
    fn element(&self, index: usize) -> Option<Self>;

    /// Canonical, locale-invariant text of a scalar value.
    ///
    /// Returns `None` for values without a direct textual form (nodes,
    /// arrays, assets, nulls).
    fn text(&self) -> Option<String>;

    /// URL of an asset reference, when the value is one and has a URL.
    fn asset_url(&self) -> Option<String>;
}
