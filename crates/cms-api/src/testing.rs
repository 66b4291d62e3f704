//! In-memory content tree used by the unit tests of this crate

use std::collections::BTreeMap;

use crate::field_type::{ASSET_LINK, FieldKind, FieldTypeDescriptor};
use crate::locale::Locale;
use crate::node::{ContentNode, FieldValue};
use crate::page::{CmsPage, resolve_field};

#[derive(Debug, Clone)]
pub(crate) enum TestValue {
    Text(String),
    Asset(Option<String>),
    Node(TestNode),
    List(Vec<TestValue>),
}

impl TestValue {
    pub(crate) fn text(s: &str) -> Self {
        TestValue::Text(s.to_string())
    }

    pub(crate) fn asset(url: Option<&str>) -> Self {
        TestValue::Asset(url.map(String::from))
    }
}

#[derive(Debug, Clone)]
enum Variants {
    Single(TestValue),
    Localized(BTreeMap<String, TestValue>),
}

#[derive(Debug, Clone)]
struct TestField {
    descriptor: Option<FieldTypeDescriptor>,
    variants: Variants,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct TestNode {
    fields: BTreeMap<String, TestField>,
}

impl TestNode {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_field(
        mut self,
        name: &str,
        descriptor: Option<FieldTypeDescriptor>,
        value: TestValue,
    ) -> Self {
        self.fields.insert(
            name.to_string(),
            TestField {
                descriptor,
                variants: Variants::Single(value),
            },
        );
        self
    }

    pub(crate) fn with_localized(
        mut self,
        name: &str,
        descriptor: FieldTypeDescriptor,
        variants: &[(&str, TestValue)],
    ) -> Self {
        let variants = variants
            .iter()
            .map(|(locale, value)| (locale.to_string(), value.clone()))
            .collect();
        self.fields.insert(
            name.to_string(),
            TestField {
                descriptor: Some(descriptor),
                variants: Variants::Localized(variants),
            },
        );
        self
    }

    pub(crate) fn with_text(self, name: &str, text: &str) -> Self {
        self.with_field(
            name,
            Some(FieldTypeDescriptor::scalar(FieldKind::Text)),
            TestValue::text(text),
        )
    }

    pub(crate) fn with_node(self, name: &str, node: TestNode) -> Self {
        self.with_field(
            name,
            Some(FieldTypeDescriptor::link("Entry")),
            TestValue::Node(node),
        )
    }

    pub(crate) fn with_list(self, name: &str, items: Vec<TestValue>) -> Self {
        let descriptor = match items.first() {
            Some(TestValue::Node(_)) => FieldTypeDescriptor::array_of_links("Entry"),
            Some(TestValue::Asset(_)) => FieldTypeDescriptor::array_of_links(ASSET_LINK),
            _ => FieldTypeDescriptor::array_of(FieldKind::Text),
        };
        self.with_field(name, Some(descriptor), TestValue::List(items))
    }

    pub(crate) fn text_of(&self, name: &str) -> Option<&str> {
        match &self.fields.get(name)?.variants {
            Variants::Single(TestValue::Text(text)) => Some(text),
            _ => None,
        }
    }

    fn single(&self, name: &str) -> Option<&TestValue> {
        match &self.fields.get(name)?.variants {
            Variants::Single(value) => Some(value),
            Variants::Localized(_) => None,
        }
    }
}

impl<'a> ContentNode for &'a TestNode {
    type Value = &'a TestValue;

    fn has_field(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    fn child(&self, name: &str) -> Option<Self> {
        match self.single(name)? {
            TestValue::Node(node) => Some(node),
            _ => None,
        }
    }

    fn child_at(&self, name: &str, index: usize) -> Option<Self> {
        match self.single(name)? {
            TestValue::List(items) => match items.get(index)? {
                TestValue::Node(node) => Some(node),
                _ => None,
            },
            _ => None,
        }
    }

    fn field_type(&self, name: &str) -> Option<FieldTypeDescriptor> {
        self.fields.get(name)?.descriptor.clone()
    }

    fn field_locales(&self, name: &str) -> Option<Vec<String>> {
        match &self.fields.get(name)?.variants {
            Variants::Localized(variants) => Some(variants.keys().cloned().collect()),
            Variants::Single(_) => None,
        }
    }

    fn field_value(&self, name: &str, locale: Option<&str>) -> Option<Self::Value> {
        match (&self.fields.get(name)?.variants, locale) {
            (Variants::Single(value), _) => Some(value),
            (Variants::Localized(variants), Some(locale)) => variants.get(locale),
            (Variants::Localized(variants), None) if variants.len() == 1 => {
                variants.values().next()
            }
            (Variants::Localized(_), None) => None,
        }
    }
}

impl FieldValue for &TestValue {
    fn is_array(&self) -> bool {
        matches!(self, TestValue::List(_))
    }

    fn element(&self, index: usize) -> Option<Self> {
        match *self {
            TestValue::List(items) => items.get(index),
            _ => None,
        }
    }

    fn text(&self) -> Option<String> {
        match *self {
            TestValue::Text(text) => Some(text.clone()),
            _ => None,
        }
    }

    fn asset_url(&self) -> Option<String> {
        match *self {
            TestValue::Asset(url) => url.clone(),
            _ => None,
        }
    }
}

/// A page over a borrowed [`TestNode`] tree.
#[derive(Debug, Clone)]
pub(crate) struct TestPage<'a> {
    root: &'a TestNode,
    locales: Vec<Locale>,
}

impl<'a> TestPage<'a> {
    pub(crate) fn new(root: &'a TestNode, locales: Vec<Locale>) -> Self {
        Self { root, locales }
    }
}

impl CmsPage for TestPage<'_> {
    fn field(&self, path: &str) -> Option<String> {
        resolve_field(self.root, &self.locales, path)
    }
}
