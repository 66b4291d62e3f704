//! CMS identifiers of the form `entryType:entryKey.fieldName`

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identifies a field of a CMS entry.
///
/// - `entry_type`: type of entry, which usually defines its fields (e.g. `banner`)
/// - `entry_key`: key of the particular entry (e.g. `homeTopLeft`)
/// - `field_name`: field holding the requested content (e.g. `subtitle`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CmsIdentifier {
    pub entry_type: String,
    pub entry_key: String,
    pub field_name: String,
}

impl CmsIdentifier {
    pub fn new(
        entry_type: impl Into<String>,
        entry_key: impl Into<String>,
        field_name: impl Into<String>,
    ) -> Self {
        Self {
            entry_type: entry_type.into(),
            entry_key: entry_key.into(),
            field_name: field_name.into(),
        }
    }

    /// Parse `entryType:entryKey.fieldName`.
    ///
    /// The entry type ends at the first `:` and the entry key at the first
    /// `.` after it; the field name may itself be a dotted path. Missing
    /// parts are empty. Parsing never fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use cms_api::CmsIdentifier;
    ///
    /// let id = CmsIdentifier::parse("banner:homeTopLeft.subtitle");
    /// assert_eq!(id.entry_type, "banner");
    /// assert_eq!(id.entry_key, "homeTopLeft");
    /// assert_eq!(id.field_name, "subtitle");
    ///
    /// let id = CmsIdentifier::parse("homeTopLeft");
    /// assert_eq!(id.entry_type, "");
    /// assert_eq!(id.entry_key, "homeTopLeft");
    /// assert_eq!(id.field_name, "");
    /// ```
    pub fn parse(input: &str) -> Self {
        let (entry_type, content) = input.split_once(':').unwrap_or(("", input));
        let (entry_key, field_name) = content.split_once('.').unwrap_or((content, ""));
        Self::new(entry_type, entry_key, field_name)
    }
}

impl FromStr for CmsIdentifier {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for CmsIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "entry type: '{}', entry key: '{}', field name: '{}'",
            self.entry_type, self.entry_key, self.field_name
        )
    }
}
