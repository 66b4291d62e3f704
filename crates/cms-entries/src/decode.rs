//! Decoding entry documents from JSON
//!
//! An entry document carries its content type, and field values are decoded
//! by the type each field declares:
//!
//! ```json
//! {
//!   "id": "home",
//!   "locale": "en",
//!   "contentType": {
//!     "id": "page",
//!     "fields": [{ "id": "title", "type": "Symbol" }]
//!   },
//!   "fields": { "title": { "en": "Home", "de": "Startseite" } }
//! }
//! ```

use std::collections::BTreeMap;
use std::sync::Arc;

use cms_api::field_type::FieldTypeDefinition;
use cms_api::{ASSET_LINK, Error, FieldKind, FieldTypeDescriptor, Result};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::model::{
    Asset, ContentDate, ContentType, Entry, EntryValue, FieldDefinition, Location,
    LocalizedValues,
};

const ENTRY_LINK: &str = "Entry";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EntryDocument {
    id: String,
    #[serde(default)]
    locale: Option<String>,
    content_type: ContentTypeDocument,
    #[serde(default)]
    fields: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
struct ContentTypeDocument {
    id: String,
    #[serde(default)]
    fields: Vec<FieldDocument>,
}

#[derive(Debug, Deserialize)]
struct FieldDocument {
    id: String,
    #[serde(flatten)]
    definition: FieldTypeDefinition,
}

impl Entry {
    /// Decode an entry document.
    ///
    /// Fails with [`Error::InvalidDocument`] when the document is not
    /// entry-shaped or a field does not map locales to values. A value that
    /// does not fit the type its field declares is kept raw, so that field
    /// alone reads as absent.
    pub fn from_json(document: &Value) -> Result<Entry> {
        let document = EntryDocument::deserialize(document)
            .map_err(|e| Error::invalid_document(format!("entry: {e}")))?;
        decode_entry(document)
    }

    /// Decode an entry document from JSON text.
    pub fn from_json_str(text: &str) -> Result<Entry> {
        let document: Value = serde_json::from_str(text)?;
        Entry::from_json(&document)
    }
}

fn decode_entry(document: EntryDocument) -> Result<Entry> {
    let content_type = ContentType {
        id: document.content_type.id,
        fields: document
            .content_type
            .fields
            .into_iter()
            .map(|field| FieldDefinition {
                descriptor: FieldTypeDescriptor::try_from(&field.definition).ok(),
                id: field.id,
            })
            .collect(),
    };

    let mut fields = BTreeMap::new();
    for (name, raw) in document.fields {
        let Value::Object(variants) = raw else {
            return Err(Error::invalid_document(format!(
                "field '{name}' of entry '{}' must map locales to values",
                document.id
            )));
        };
        let descriptor = content_type
            .field(&name)
            .and_then(|field| field.descriptor.as_ref());

        let mut values = LocalizedValues::new();
        for (locale, value) in variants {
            if value.is_null() {
                continue;
            }
            let decoded = match descriptor {
                Some(descriptor) => {
                    let decoded = decode_value(value, descriptor);
                    if let EntryValue::Raw(raw) = &decoded {
                        tracing::debug!(
                            entry = %document.id,
                            field = %name,
                            %locale,
                            kind = %descriptor.kind,
                            value = %raw,
                            "Value does not match declared kind"
                        );
                    }
                    decoded
                }
                None => decode_untyped(value),
            };
            values.insert(locale, decoded);
        }
        fields.insert(name, values);
    }

    Ok(Entry {
        id: document.id,
        locale: document.locale,
        content_type,
        fields,
    })
}

/// Decode `value` as `descriptor` declares, keeping it raw when it does not
/// fit.
fn decode_value(value: Value, descriptor: &FieldTypeDescriptor) -> EntryValue {
    match descriptor.kind {
        FieldKind::Array => {
            let Value::Array(items) = value else {
                return EntryValue::Raw(value);
            };
            let element = element_descriptor(descriptor);
            EntryValue::Array(
                items
                    .into_iter()
                    .map(|item| match &element {
                        Some(element) => decode_value(item, element),
                        None => EntryValue::Raw(item),
                    })
                    .collect(),
            )
        }
        FieldKind::Link => decode_link(value, descriptor.link_kind.as_deref()),
        kind => decode_scalar(value, kind),
    }
}

/// Descriptor of the elements of an array field; nested arrays are not
/// supported and decode as raw values.
fn element_descriptor(descriptor: &FieldTypeDescriptor) -> Option<FieldTypeDescriptor> {
    match descriptor.element_kind? {
        FieldKind::Array => None,
        FieldKind::Link => Some(FieldTypeDescriptor::link(
            descriptor.element_link_kind.clone().unwrap_or_default(),
        )),
        kind => Some(FieldTypeDescriptor::scalar(kind)),
    }
}

fn decode_scalar(value: Value, kind: FieldKind) -> EntryValue {
    let decoded = match (kind, &value) {
        (FieldKind::Boolean, Value::Bool(b)) => Some(EntryValue::Boolean(*b)),
        (FieldKind::Integer, Value::Number(n)) => n.as_i64().map(EntryValue::Integer),
        (FieldKind::Number, Value::Number(n)) => n.as_f64().map(EntryValue::Number),
        (FieldKind::Symbol | FieldKind::Text, Value::String(s)) => {
            Some(EntryValue::Text(s.clone()))
        }
        (FieldKind::Date, Value::String(s)) => ContentDate::parse(s).map(EntryValue::Date),
        (FieldKind::Location, Value::Object(_)) => Location::deserialize(&value)
            .ok()
            .map(EntryValue::Location),
        _ => None,
    };
    decoded.unwrap_or(EntryValue::Raw(value))
}

fn decode_link(value: Value, link_kind: Option<&str>) -> EntryValue {
    match link_kind {
        Some(ASSET_LINK) => match Asset::deserialize(&value) {
            Ok(asset) => EntryValue::Asset(asset),
            Err(_) => EntryValue::Raw(value),
        },
        Some(ENTRY_LINK) => decode_linked_entry(value),
        _ => EntryValue::Raw(value),
    }
}

/// A linked entry document, or the raw value when it is not one.
fn decode_linked_entry(value: Value) -> EntryValue {
    let decoded = EntryDocument::deserialize(&value)
        .map_err(|e| Error::invalid_document(e.to_string()))
        .and_then(decode_entry);
    match decoded {
        Ok(entry) => EntryValue::Entry(Arc::new(entry)),
        Err(e) => {
            tracing::debug!(error = %e, "Linked value is not an entry");
            EntryValue::Raw(value)
        }
    }
}

/// Values of undeclared fields: nested entry documents stay navigable,
/// everything else is kept raw.
fn decode_untyped(value: Value) -> EntryValue {
    match value {
        Value::Array(items) => EntryValue::Array(items.into_iter().map(decode_untyped).collect()),
        Value::Object(object) if object.contains_key("contentType") => {
            decode_linked_entry(Value::Object(object))
        }
        other => EntryValue::Raw(other),
    }
}
