//! Command implementations for cms-cli

pub mod compose;
pub mod field;
pub mod identifier;

use std::path::{Path, PathBuf};

use cms_api::CmsConfig;
use serde_json::Value;

use crate::error::{CliError, Result};

pub use compose::run_compose;
pub use field::run_field;
pub use identifier::run_identifier;

/// Location of the user configuration file.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("cms").join("config.toml"))
}

/// Load the configuration from `explicit`, else from the user configuration
/// file when it exists, else use defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<CmsConfig> {
    if let Some(path) = explicit {
        return Ok(CmsConfig::load(path)?);
    }
    match default_config_path() {
        Some(path) if path.is_file() => Ok(CmsConfig::load(&path)?),
        _ => {
            tracing::debug!("No config file, using defaults");
            Ok(CmsConfig::default())
        }
    }
}

/// Read and parse a JSON document.
pub fn read_document(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        CliError::user(format!("Cannot read document {}: {e}", path.display()))
    })?;
    Ok(serde_json::from_str(&content)?)
}
