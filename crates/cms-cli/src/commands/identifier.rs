//! The `identifier` command

use cms_api::CmsIdentifier;

use crate::error::Result;

/// Run the identifier command
pub fn run_identifier(id: &str) -> Result<()> {
    println!("{}", CmsIdentifier::parse(id));
    Ok(())
}
