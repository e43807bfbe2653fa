//! Snapshot of the existing-grant registry.
//!
//! The registry arrives as a JSON-encoded array of grant records. Only page
//! and url identity matter here; which users hold a grant is irrelevant to
//! computing the remaining catalog.

use serde::Deserialize;

use navgrant_core::{normalize_url, CatalogEntry};

/// One existing access grant, as recorded by the external authority.
///
/// `url` is stored normalized (no leading path separator). Serialized
/// records carry more fields than these; the extras are ignored, and a
/// record missing either field keeps an empty string in its place.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ExistingGrant {
    /// Page label the grant was recorded under.
    #[serde(default)]
    pub page: String,

    /// Normalized page url.
    #[serde(default)]
    pub url: String,
}

/// How a snapshot was obtained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Provenance {
    /// The serialized state parsed cleanly.
    Parsed {
        /// Number of grant records read.
        count: usize,
    },

    /// No serialized state was supplied (absent or blank).
    Absent,

    /// The serialized state could not be parsed.
    ///
    /// The snapshot is empty in this case, so the full catalog appears
    /// ungranted and a bulk submission may duplicate grants the authority
    /// already holds. Availability is chosen over strictness; the fault is
    /// recorded here and logged so it is visible to operators.
    Malformed {
        /// Parser diagnostic.
        error: String,
    },
}

/// An explicit, immutable snapshot of the existing grants.
///
/// Always passed by value/reference into resolution, never read from
/// ambient global state, so a provisioning operation sees one consistent
/// view of the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrySnapshot {
    grants: Vec<ExistingGrant>,
    provenance: Provenance,
}

impl RegistrySnapshot {
    /// An empty snapshot with [`Provenance::Absent`].
    pub fn empty() -> Self {
        Self {
            grants: Vec::new(),
            provenance: Provenance::Absent,
        }
    }

    /// Parse the serialized registry state.
    ///
    /// `None`, empty, and whitespace-only input yield an empty snapshot;
    /// so does input that fails to parse, in which case the error is kept
    /// on the provenance and a warning is emitted. A successful parse
    /// normalizes every record's url.
    pub fn parse(raw: Option<&str>) -> Self {
        let raw = match raw {
            Some(s) if !s.trim().is_empty() => s,
            _ => return Self::empty(),
        };

        match serde_json::from_str::<Vec<ExistingGrant>>(raw) {
            Ok(mut grants) => {
                for grant in &mut grants {
                    if grant.url.starts_with('/') {
                        grant.url = normalize_url(&grant.url).to_string();
                    }
                }
                let count = grants.len();
                Self {
                    grants,
                    provenance: Provenance::Parsed { count },
                }
            }
            Err(e) => {
                tracing::warn!("unreadable grant registry state, treating as empty: {e}");
                Self {
                    grants: Vec::new(),
                    provenance: Provenance::Malformed {
                        error: e.to_string(),
                    },
                }
            }
        }
    }

    /// The grant records, in registry order.
    pub fn grants(&self) -> &[ExistingGrant] {
        &self.grants
    }

    /// How this snapshot was obtained.
    pub fn provenance(&self) -> &Provenance {
        &self.provenance
    }

    /// Number of grant records.
    pub fn len(&self) -> usize {
        self.grants.len()
    }

    /// Whether the snapshot holds no grants.
    pub fn is_empty(&self) -> bool {
        self.grants.is_empty()
    }

    /// Whether an existing grant already covers `entry`.
    ///
    /// Matching is deliberately loose: a grant excludes the entry when its
    /// page label matches the entry's title **or** its url matches the
    /// entry's normalized url. Either identifier alone is enough, so a page
    /// renamed without moving (or moved without renaming) is not granted a
    /// second time over the bulk path.
    pub fn excludes(&self, entry: &CatalogEntry) -> bool {
        let normalized = entry.normalized_url();
        self.grants
            .iter()
            .any(|grant| grant.page == entry.title || grant.url == normalized)
    }
}

impl Default for RegistrySnapshot {
    fn default() -> Self {
        Self::empty()
    }
}
