//! The `field` command

use std::path::Path;

use cms_api::{Backend, CmsPage, Locale};
use cms_custom_objects::CustomObjectPage;
use cms_entries::{Entry, EntryPage};
use serde_json::Value;

use super::{load_config, read_document};
use crate::error::Result;

/// Build the page held by `document` for `backend`.
pub fn open_page(
    document: &Value,
    backend: Backend,
    locales: Vec<Locale>,
) -> Result<Box<dyn CmsPage>> {
    let page: Box<dyn CmsPage> = match backend {
        Backend::Entries => Box::new(EntryPage::new(Entry::from_json(document)?, locales)),
        Backend::CustomObjects => {
            Box::new(CustomObjectPage::from_custom_object(document, locales)?)
        }
    };
    Ok(page)
}

/// Resolve each path, using an empty string for paths that do not resolve.
pub fn resolve_all(page: &dyn CmsPage, paths: &[String]) -> Vec<String> {
    paths.iter().map(|path| page.field_or_default(path)).collect()
}

/// Run the field command
pub fn run_field(
    document: &Path,
    paths: &[String],
    locales: Vec<Locale>,
    backend: Option<Backend>,
    config: Option<&Path>,
) -> Result<()> {
    let config = load_config(config)?;
    let backend = backend.unwrap_or(config.cms.backend);
    let locales = if locales.is_empty() {
        config.cms.locales
    } else {
        locales
    };
    tracing::debug!(%backend, ?locales, document = %document.display(), "Resolving fields");

    let document = read_document(document)?;
    let page = open_page(&document, backend, locales)?;
    for value in resolve_all(page.as_ref(), paths) {
        println!("{value}");
    }
    Ok(())
}
