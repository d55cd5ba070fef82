//! Resolved colors and color groups.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A normalized, renderer-safe color expression.
///
/// Always one of:
/// - a `#`-prefixed 6-digit hex code,
/// - a lowercase name from the standard allow-list,
/// - a lowercase `rgb(r,g,b)` triple,
/// - or the configured fallback color.
///
/// Values are produced by the resolver in `thenmap-style`; the constructor
/// trusts its input, so anything else handing raw caller data to [`new`]
/// should resolve it first.
///
/// [`new`]: ResolvedColor::new
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResolvedColor(String);

impl ResolvedColor {
    /// Wraps an already-normalized color expression.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the color expression as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the color, returning the inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ResolvedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for ResolvedColor {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A set of entity selectors sharing one resolved color.
///
/// Selectors within a group are unique, and an entity appears in at most
/// one group per colorization pass. Grouping is what keeps generated style
/// size proportional to the number of distinct colors rather than the
/// number of entities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorGroup {
    /// The shared color.
    pub color: ResolvedColor,
    /// Selectors for every entity shape painted with this color.
    pub selectors: Vec<String>,
}

impl ColorGroup {
    /// Creates an empty group for a color.
    #[must_use]
    pub fn new(color: ResolvedColor) -> Self {
        Self {
            color,
            selectors: Vec::new(),
        }
    }

    /// Whether the group holds no selectors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selectors.is_empty()
    }
}
