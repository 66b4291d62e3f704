//! Page field resolution
//!
//! A page is a content tree plus the caller's locale preferences. Reading a
//! field parses the path, walks the entry path, selects a locale variant,
//! optionally picks an array element, and converts the value according to
//! the field's declared type.
//!
//! Every failure along the way (malformed path, missing field, wrong node
//! type, index out of range, type mismatch, unsupported kind, no variant in
//! a requested locale) yields `None`. Callers cannot and need not tell these
//! apart.

use crate::field_type::stringify;
use crate::locale::{Locale, select_locale};
use crate::navigate::find_node;
use crate::node::{ContentNode, FieldValue};
use crate::path::{PathSegment, parse_path};

/// A hierarchical, read-only collection of CMS content addressed by path.
///
/// Paths are made of field names delimited with `.`, each optionally
/// followed by an array index such as `[3]`. For example
/// `firstLevel[2].secondLevel[3].thirdLevel[1]` looks up the third item of
/// `firstLevel`, then the fourth item of its `secondLevel`, and finally
/// reads the second element of that item's `thirdLevel` array, which must
/// have a string representation.
pub trait CmsPage {
    /// String representation of the content identified by `path`.
    fn field(&self, path: &str) -> Option<String>;

    /// Like [`CmsPage::field`], returning an empty string when absent.
    fn field_or_default(&self, path: &str) -> String {
        self.field(path).unwrap_or_default()
    }
}

impl<P: CmsPage + ?Sized> CmsPage for Box<P> {
    fn field(&self, path: &str) -> Option<String> {
        (**self).field(path)
    }
}

/// Resolve `path` against `root` with the given locale preferences.
///
/// An empty `locales` list reads each field's single representation without
/// locale disambiguation.
pub fn resolve_field<N: ContentNode>(root: N, locales: &[Locale], path: &str) -> Option<String> {
    let Some(path) = parse_path(path) else {
        tracing::trace!(path, "Malformed path expression");
        return None;
    };
    let node = find_node(root, &path.entry)?;
    read_leaf(&node, locales, &path.leaf)
}

fn read_leaf<N: ContentNode>(node: &N, locales: &[Locale], leaf: &PathSegment) -> Option<String> {
    let descriptor = node.field_type(&leaf.name)?;

    // Arrays are only read element-wise, and only arrays take an index.
    if descriptor.is_array() != leaf.index.is_some() {
        tracing::trace!(field = %leaf, kind = %descriptor.kind, "Index does not match field kind");
        return None;
    }

    let value = read_localized(node, locales, &leaf.name)?;

    let value = match leaf.index {
        Some(index) if value.is_array() => value.element(index)?,
        Some(_) => return None,
        None if value.is_array() => return None,
        None => value,
    };

    stringify(&value, &descriptor)
}

fn read_localized<N: ContentNode>(node: &N, locales: &[Locale], name: &str) -> Option<N::Value> {
    match node.field_locales(name) {
        Some(available) if !locales.is_empty() => {
            let Some(locale) = select_locale(locales, &available) else {
                tracing::trace!(field = name, ?available, "No variant in any requested locale");
                return None;
            };
            node.field_value(name, Some(locale.tag()))
        }
        _ => node.field_value(name, None),
    }
}
