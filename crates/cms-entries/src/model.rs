//! Entries, assets and content types

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use cms_api::FieldTypeDescriptor;
use serde::{Deserialize, Serialize};

/// A media file referenced from an entry.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Asset {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// A geographic point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lon: f64,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{lon={}, lat={}}}", self.lon, self.lat)
    }
}

/// Value of a `Date` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentDate {
    /// Date and time with a UTC offset
    Zoned(DateTime<FixedOffset>),
    /// Date and time without offset
    Local(NaiveDateTime),
    /// Calendar day
    Day(NaiveDate),
}

impl ContentDate {
    /// Parse RFC 3339, `YYYY-MM-DDTHH:MM[:SS]`, or `YYYY-MM-DD`.
    pub fn parse(text: &str) -> Option<Self> {
        if let Ok(zoned) = DateTime::parse_from_rfc3339(text) {
            return Some(ContentDate::Zoned(zoned));
        }
        for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
            if let Ok(local) = NaiveDateTime::parse_from_str(text, format) {
                return Some(ContentDate::Local(local));
            }
        }
        NaiveDate::parse_from_str(text, "%Y-%m-%d")
            .ok()
            .map(ContentDate::Day)
    }
}

impl fmt::Display for ContentDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentDate::Zoned(zoned) => write!(f, "{}", zoned.to_rfc3339()),
            ContentDate::Local(local) => write!(f, "{}", local.format("%Y-%m-%dT%H:%M:%S")),
            ContentDate::Day(day) => write!(f, "{}", day.format("%Y-%m-%d")),
        }
    }
}

/// Raw value of one locale variant of an entry field.
#[derive(Debug, Clone, PartialEq)]
pub enum EntryValue {
    Boolean(bool),
    Integer(i64),
    Number(f64),
    Text(String),
    Date(ContentDate),
    Location(Location),
    Asset(Asset),
    Entry(Arc<Entry>),
    Array(Vec<EntryValue>),
    /// A value whose type is not declared or not supported
    Raw(serde_json::Value),
}

impl EntryValue {
    /// Canonical text of scalar values.
    pub fn to_text(&self) -> Option<String> {
        match self {
            EntryValue::Boolean(b) => Some(b.to_string()),
            EntryValue::Integer(i) => Some(i.to_string()),
            EntryValue::Number(n) => Some(n.to_string()),
            EntryValue::Text(s) => Some(s.clone()),
            EntryValue::Date(date) => Some(date.to_string()),
            EntryValue::Location(location) => Some(location.to_string()),
            EntryValue::Asset(_)
            | EntryValue::Entry(_)
            | EntryValue::Array(_)
            | EntryValue::Raw(_) => None,
        }
    }
}

/// A field declared by a content type.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDefinition {
    pub id: String,
    /// `None` when the declared type is not supported
    pub descriptor: Option<FieldTypeDescriptor>,
}

/// The schema of an entry.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ContentType {
    pub id: String,
    pub fields: Vec<FieldDefinition>,
}

impl ContentType {
    pub fn field(&self, id: &str) -> Option<&FieldDefinition> {
        self.fields.iter().find(|field| field.id == id)
    }
}

/// Locale tag → value of one field.
pub type LocalizedValues = BTreeMap<String, EntryValue>;

/// A typed document with per-locale field values.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Entry {
    pub id: String,
    /// Locale the entry was delivered in, used when no locale is requested
    pub locale: Option<String>,
    pub content_type: ContentType,
    pub fields: BTreeMap<String, LocalizedValues>,
}

impl Entry {
    /// Locale tags for which `field` has a value.
    pub fn locales_of(&self, field: &str) -> Option<Vec<String>> {
        self.fields
            .get(field)
            .map(|variants| variants.keys().cloned().collect())
    }

    /// Value of `field` in `locale`.
    pub fn value_in(&self, field: &str, locale: &str) -> Option<&EntryValue> {
        self.fields.get(field)?.get(locale)
    }

    /// The single representation of `field`: its value in the entry's own
    /// locale, or its only value when it has exactly one.
    pub fn single_value(&self, field: &str) -> Option<&EntryValue> {
        let variants = self.fields.get(field)?;
        if let Some(value) = self.locale.as_deref().and_then(|l| variants.get(l)) {
            return Some(value);
        }
        match variants.len() {
            1 => variants.values().next(),
            _ => None,
        }
    }
}
