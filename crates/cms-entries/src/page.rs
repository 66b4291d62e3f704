//! Pages backed by an entry

use cms_api::{CmsPage, Locale, resolve_field};

use crate::model::Entry;
use crate::node::EntryNode;

/// A page whose content is a (possibly linked) entry.
#[derive(Debug, Clone)]
pub struct EntryPage {
    entry: Entry,
    locales: Vec<Locale>,
}

impl EntryPage {
    pub fn new(entry: Entry, locales: Vec<Locale>) -> Self {
        Self { entry, locales }
    }

    pub fn entry(&self) -> &Entry {
        &self.entry
    }

    pub fn locales(&self) -> &[Locale] {
        &self.locales
    }
}

impl CmsPage for EntryPage {
    fn field(&self, path: &str) -> Option<String> {
        resolve_field(EntryNode::new(&self.entry, &self.locales), &self.locales, path)
    }
}
