//! ContentNode view of entries

use cms_api::{ContentNode, FieldTypeDescriptor, FieldValue, Locale, select_locale};

use crate::model::{Entry, EntryValue};

/// An entry seen through the caller's locale preferences.
///
/// Links are followed in the first preferred locale the link field is
/// defined for, falling back to the field's single representation.
#[derive(Debug, Clone, Copy)]
pub struct EntryNode<'a> {
    entry: &'a Entry,
    locales: &'a [Locale],
}

impl<'a> EntryNode<'a> {
    pub fn new(entry: &'a Entry, locales: &'a [Locale]) -> Self {
        Self { entry, locales }
    }

    pub fn entry(&self) -> &'a Entry {
        self.entry
    }

    fn navigation_value(&self, name: &str) -> Option<&'a EntryValue> {
        let variants = self.entry.fields.get(name)?;
        select_locale(self.locales, &variants.keys().collect::<Vec<_>>())
            .and_then(|locale| variants.get(locale.tag()))
            .or_else(|| self.entry.single_value(name))
    }

    fn linked(&self, value: &'a EntryValue) -> Option<Self> {
        match value {
            EntryValue::Entry(entry) => Some(Self::new(entry, self.locales)),
            _ => None,
        }
    }
}

impl<'a> ContentNode for EntryNode<'a> {
    type Value = &'a EntryValue;

    fn has_field(&self, name: &str) -> bool {
        self.entry.fields.contains_key(name)
    }

    fn child(&self, name: &str) -> Option<Self> {
        self.linked(self.navigation_value(name)?)
    }

    fn child_at(&self, name: &str, index: usize) -> Option<Self> {
        match self.navigation_value(name)? {
            EntryValue::Array(items) => self.linked(items.get(index)?),
            _ => None,
        }
    }

    fn field_type(&self, name: &str) -> Option<FieldTypeDescriptor> {
        self.entry.content_type.field(name)?.descriptor.clone()
    }

    fn field_locales(&self, name: &str) -> Option<Vec<String>> {
        self.entry.locales_of(name)
    }

    fn field_value(&self, name: &str, locale: Option<&str>) -> Option<Self::Value> {
        match locale {
            Some(locale) => self.entry.value_in(name, locale),
            None => self.entry.single_value(name),
        }
    }
}

impl FieldValue for &EntryValue {
    fn is_array(&self) -> bool {
        matches!(self, EntryValue::Array(_))
    }

    fn element(&self, index: usize) -> Option<Self> {
        match *self {
            EntryValue::Array(items) => items.get(index),
            _ => None,
        }
    }

    fn text(&self) -> Option<String> {
        self.to_text()
    }

    fn asset_url(&self) -> Option<String> {
        match self {
            EntryValue::Asset(asset) => asset.url.clone(),
            _ => None,
        }
    }
}
