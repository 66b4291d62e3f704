//! Path expression parsing
//!
//! A path addresses a field inside a page's content tree using dot-separated
//! field names, each optionally followed by an array index.
//!
//! # Path Syntax
//!
//! - Dot-separated names: `banner.image`
//! - Array indexing: `banners[2].title`
//! - Indexed leaf: `gallery[0]`
//!
//! The last segment is the *leaf* (the field whose value is read); all
//! segments before it form the *entry path* (the nodes descended through).
//!
//! # Examples
//!
//! ```
//! use cms_api::path::{parse_path, PathSegment};
//!
//! let path = parse_path("banners[2].image").unwrap();
//! assert_eq!(path.entry, vec![PathSegment::indexed("banners", 2)]);
//! assert_eq!(path.leaf, PathSegment::named("image"));
//!
//! assert!(parse_path("  ").is_none());
//! assert!(parse_path("banners[x]").is_none());
//! ```

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

/// `<name>` or `<name>[<digits>]`, where the name carries no brackets.
static SEGMENT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([^\[\]]+)(?:\[([0-9]+)\])?$").unwrap());

/// One hop of a path: a field name with an optional array index.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PathSegment {
    /// Field name (e.g., "banners" in `banners[2]`)
    pub name: String,
    /// Element position when the field is array-valued (e.g., 2 in `banners[2]`)
    pub index: Option<usize>,
}

impl PathSegment {
    /// A plain field segment.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            index: None,
        }
    }

    /// A segment addressing one element of an array field.
    pub fn indexed(name: impl Into<String>, index: usize) -> Self {
        Self {
            name: name.into(),
            index: Some(index),
        }
    }

    /// Parse a single dot-free token.
    fn parse_token(token: &str) -> Option<Self> {
        let captures = SEGMENT_PATTERN.captures(token)?;
        let name = captures.get(1)?.as_str();
        let index = match captures.get(2) {
            Some(digits) => Some(digits.as_str().parse::<usize>().ok()?),
            None => None,
        };
        Some(Self {
            name: name.to_string(),
            index,
        })
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.index {
            Some(index) => write!(f, "{}[{}]", self.name, index),
            None => write!(f, "{}", self.name),
        }
    }
}

/// A parsed path: the nodes to descend through plus the leaf field.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldPath {
    /// Segments identifying nodes to descend into, in order
    pub entry: Vec<PathSegment>,
    /// Final segment identifying the field to read
    pub leaf: PathSegment,
}

impl FieldPath {
    /// Build a path from its segments. Returns `None` for an empty sequence.
    pub fn from_segments(mut segments: Vec<PathSegment>) -> Option<Self> {
        let leaf = segments.pop()?;
        Some(Self {
            entry: segments,
            leaf,
        })
    }

    /// All segments, entry path first and leaf last.
    pub fn segments(&self) -> impl Iterator<Item = &PathSegment> {
        self.entry.iter().chain(std::iter::once(&self.leaf))
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.entry {
            write!(f, "{}.", segment)?;
        }
        write!(f, "{}", self.leaf)
    }
}

impl FromStr for FieldPath {
    type Err = InvalidPath;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        parse_path(s).ok_or_else(|| InvalidPath(s.to_string()))
    }
}

/// A string that does not follow the path grammar.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid path expression: {0:?}")]
pub struct InvalidPath(pub String);

/// Parse a path string into an entry path and a leaf segment.
///
/// Returns `None` when the path is empty or blank, or when any dot-separated
/// token is not of the form `name` or `name[digits]`.
///
/// # Examples
///
/// ```
/// use cms_api::path::{parse_path, PathSegment};
///
/// let path = parse_path("title").unwrap();
/// assert!(path.entry.is_empty());
/// assert_eq!(path.leaf, PathSegment::named("title"));
///
/// let path = parse_path("array[1].name").unwrap();
/// assert_eq!(path.entry, vec![PathSegment::indexed("array", 1)]);
/// assert_eq!(path.leaf, PathSegment::named("name"));
/// ```
pub fn parse_path(path: &str) -> Option<FieldPath> {
    if path.trim().is_empty() {
        return None;
    }

    let segments = path
        .split('.')
        .map(PathSegment::parse_token)
        .collect::<Option<Vec<_>>>()?;

    FieldPath::from_segments(segments)
}
