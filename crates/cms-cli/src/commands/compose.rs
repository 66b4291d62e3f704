//! The `compose` command

use std::path::Path;

use cms_custom_objects::compose_custom_object;

use super::read_document;
use crate::error::Result;

/// Run the compose command
pub fn run_compose(document: &Path) -> Result<()> {
    let custom_object = read_document(document)?;
    let composed = compose_custom_object(&custom_object)?;
    println!("{}", serde_json::to_string_pretty(&composed)?);
    Ok(())
}
