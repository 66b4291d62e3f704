//! Locale tags and preference-ordered locale selection

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// An opaque language tag such as `de-DE` or `en`.
///
/// Tags are compared verbatim; no case folding or subtag matching is done.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Locale(String);

impl Locale {
    /// Create a locale from a tag, rejecting blank tags.
    pub fn new(tag: impl Into<String>) -> Result<Self, Error> {
        let tag = tag.into();
        let trimmed = tag.trim();
        if trimmed.is_empty() || trimmed.chars().any(char::is_whitespace) {
            return Err(Error::InvalidLocale { tag });
        }
        Ok(Self(trimmed.to_string()))
    }

    /// The language tag.
    pub fn tag(&self) -> &str {
        &self.0
    }
}

impl FromStr for Locale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Locale {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        locale.0
    }
}

impl AsRef<str> for Locale {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Pick the first preferred locale that is available.
///
/// Preference order is authoritative; the order of `available` does not
/// matter. Returns `None` when no preferred locale is available, which
/// means "the field exists, but not in any requested language".
///
/// # Examples
///
/// ```
/// use cms_api::locale::{select_locale, Locale};
///
/// let preferences: Vec<Locale> = vec!["de-DE".parse().unwrap(), "en".parse().unwrap()];
/// let available = ["fr", "en", "de-DE"];
/// assert_eq!(select_locale(&preferences, &available).map(Locale::tag), Some("de-DE"));
/// ```
pub fn select_locale<'a, S: AsRef<str>>(
    preferences: &'a [Locale],
    available: &[S],
) -> Option<&'a Locale> {
    preferences.iter().find(|locale| {
        available
            .iter()
            .any(|candidate| candidate.as_ref() == locale.tag())
    })
}
