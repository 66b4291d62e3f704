//! Error types for cms-api
//!
//! Path resolution never produces these: a path that cannot be satisfied
//! yields `None`. Errors belong to the page lookup and configuration layers.

/// Result type for cms-api operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while obtaining pages or loading configuration
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Non unique identifier used. Result contains {count} pages for {page_key}")]
    NonUniquePage { page_key: String, count: usize },

    #[error("Could not fetch content for {page_key}: {message}")]
    Fetch { page_key: String, message: String },

    #[error("Fetching {page_key} timed out after {millis}ms")]
    Timeout { page_key: String, millis: u64 },

    #[error("Invalid CMS document: {message}")]
    InvalidDocument { message: String },

    #[error("Invalid locale tag: {tag:?}")]
    InvalidLocale { tag: String },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub fn invalid_document(message: impl Into<String>) -> Self {
        Self::InvalidDocument {
            message: message.into(),
        }
    }

    pub fn fetch(page_key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Fetch {
            page_key: page_key.into(),
            message: message.into(),
        }
    }
}
