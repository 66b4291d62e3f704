//! Configuration types and loading
//!
//! Configuration is read from a TOML file:
//!
//! ```toml
//! [cms]
//! backend = "entries"
//! locales = ["de-DE", "en"]
//! fetch_timeout_ms = 5000
//!
//! [entries]
//! page_type = "page"
//! page_query_field = "slug"
//! include = 10
//!
//! [custom_objects]
//! container = "co-cms-pages"
//! ```
//!
//! Every section and key is optional.

use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::locale::Locale;

/// Maximum depth of linked entries resolved in one fetch.
pub const MAX_INCLUDE_DEPTH: u8 = 10;

/// Content backend a page is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Backend {
    /// Typed entries with per-locale fields
    Entries,
    /// Untyped JSON documents composed from dependencies
    #[default]
    CustomObjects,
}

impl FromStr for Backend {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "entries" | "contentful" => Ok(Backend::Entries),
            "custom-objects" | "custom_objects" | "customobjects" => Ok(Backend::CustomObjects),
            _ => Err(Error::InvalidConfig {
                message: format!("unknown backend {s:?}"),
            }),
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Backend::Entries => write!(f, "entries"),
            Backend::CustomObjects => write!(f, "custom-objects"),
        }
    }
}

/// General settings
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GeneralConfig {
    #[serde(default)]
    pub backend: Backend,
    /// Default locale preference list, most preferred first
    #[serde(default)]
    pub locales: Vec<Locale>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fetch_timeout_ms: Option<u64>,
}

/// Settings of the typed entries backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntriesConfig {
    /// Content type of page entries
    #[serde(default = "default_page_type")]
    pub page_type: String,
    /// Field of a page entry holding its key
    #[serde(default = "default_page_query_field")]
    pub page_query_field: String,
    /// Levels of linked entries to resolve
    #[serde(default = "default_include")]
    pub include: u8,
}

fn default_page_type() -> String {
    "page".to_string()
}

fn default_page_query_field() -> String {
    "slug".to_string()
}

fn default_include() -> u8 {
    MAX_INCLUDE_DEPTH
}

impl Default for EntriesConfig {
    fn default() -> Self {
        Self {
            page_type: default_page_type(),
            page_query_field: default_page_query_field(),
            include: default_include(),
        }
    }
}

/// Settings of the custom-objects backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomObjectsConfig {
    /// Container holding page custom objects
    #[serde(default = "default_container")]
    pub container: String,
}

fn default_container() -> String {
    "co-cms-pages".to_string()
}

impl Default for CustomObjectsConfig {
    fn default() -> Self {
        Self {
            container: default_container(),
        }
    }
}

/// Complete configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CmsConfig {
    #[serde(default)]
    pub cms: GeneralConfig,
    #[serde(default)]
    pub entries: EntriesConfig,
    #[serde(default)]
    pub custom_objects: CustomObjectsConfig,
}

impl CmsConfig {
    /// Parse configuration from TOML content.
    ///
    /// # Example
    ///
    /// ```
    /// use cms_api::config::{Backend, CmsConfig};
    ///
    /// let config = CmsConfig::parse(r#"
    /// [cms]
    /// backend = "entries"
    /// locales = ["de-DE", "en"]
    /// "#).unwrap();
    ///
    /// assert_eq!(config.cms.backend, Backend::Entries);
    /// assert_eq!(config.cms.locales.len(), 2);
    /// assert_eq!(config.entries.include, 10);
    /// ```
    pub fn parse(content: &str) -> Result<Self> {
        let config: CmsConfig = toml::from_str(content).map_err(|e| Error::InvalidConfig {
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(?path, "Loading CMS config");
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Timeout applied around page fetches, if configured.
    pub fn fetch_timeout(&self) -> Option<Duration> {
        self.cms.fetch_timeout_ms.map(Duration::from_millis)
    }

    fn validate(&self) -> Result<()> {
        if self.entries.include > MAX_INCLUDE_DEPTH {
            return Err(Error::InvalidConfig {
                message: format!(
                    "entries.include must be at most {MAX_INCLUDE_DEPTH}, got {}",
                    self.entries.include
                ),
            });
        }
        if self.entries.page_type.trim().is_empty() {
            return Err(Error::InvalidConfig {
                message: "entries.page_type must not be empty".to_string(),
            });
        }
        if self.entries.page_query_field.trim().is_empty() {
            return Err(Error::InvalidConfig {
                message: "entries.page_query_field must not be empty".to_string(),
            });
        }
        if self.custom_objects.container.trim().is_empty() {
            return Err(Error::InvalidConfig {
                message: "custom_objects.container must not be empty".to_string(),
            });
        }
        Ok(())
    }
}
