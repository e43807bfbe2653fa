//! Navigation definition and catalog value types.
//!
//! The navigation definition is owned by the surrounding application and
//! treated as immutable for the duration of a provisioning operation.

use serde::{Deserialize, Serialize};

/// Url sentinel marking a node as a non-navigable group header.
pub const GROUP_SENTINEL: &str = "#";

/// Strip a single leading path separator, if present.
///
/// Grant records store urls without the leading `/`, while the navigation
/// definition uses absolute paths. Comparisons and outgoing records use the
/// normalized form.
pub fn normalize_url(url: &str) -> &str {
    url.strip_prefix('/').unwrap_or(url)
}

/// A node in the navigation definition.
///
/// A node may be a navigable page, a grouping header for child items, or
/// both at once (a page that also contains sub-pages).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavNode {
    /// Display label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Alternate label used by flat sections that predate `title`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Navigable path, or [`GROUP_SENTINEL`] for a pure group header.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Child nodes, in display order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<NavNode>,
}

impl NavNode {
    /// Create a navigable page node.
    pub fn page(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            url: Some(url.into()),
            ..Self::default()
        }
    }

    /// Create a non-navigable group header with child items.
    pub fn group(title: impl Into<String>, items: Vec<NavNode>) -> Self {
        Self {
            title: Some(title.into()),
            url: Some(GROUP_SENTINEL.to_string()),
            items,
            ..Self::default()
        }
    }

    /// Create a page node labeled via the legacy `name` field.
    pub fn named(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            url: Some(url.into()),
            ..Self::default()
        }
    }

    /// Add child items to this node.
    pub fn with_items(mut self, items: Vec<NavNode>) -> Self {
        self.items = items;
        self
    }

    /// The display label: `title`, falling back to `name`.
    pub fn label(&self) -> Option<&str> {
        self.title.as_deref().or(self.name.as_deref())
    }

    /// The node's url, if it points at an actual page.
    ///
    /// Returns `None` for group headers (`"#"`) and for nodes with a
    /// missing or empty url.
    pub fn navigable_url(&self) -> Option<&str> {
        match self.url.as_deref() {
            Some(url) if !url.is_empty() && url != GROUP_SENTINEL => Some(url),
            _ => None,
        }
    }
}

/// A single navigable page, derived from the navigation definition.
///
/// `url` is kept exactly as the definition spells it; use
/// [`CatalogEntry::normalized_url`] when comparing against grant records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Display label of the page.
    pub title: String,

    /// Navigable path as written in the definition.
    pub url: String,
}

impl CatalogEntry {
    /// Create a new catalog entry.
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
        }
    }

    /// The url with any leading path separator stripped.
    pub fn normalized_url(&self) -> &str {
        normalize_url(&self.url)
    }
}
