//! Administrator selection and its resolution against the catalog.

use navgrant_core::{Catalog, CatalogEntry};
use navgrant_registry::RegistrySnapshot;

/// The administrator's intent for a provisioning operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    /// Nothing chosen yet; nothing can be submitted.
    #[default]
    Unset,

    /// One explicitly chosen page.
    Specific(CatalogEntry),

    /// Every catalog page not already covered by an existing grant.
    AllRemaining,
}

impl Selection {
    /// Whether no page has been chosen.
    pub fn is_unset(&self) -> bool {
        matches!(self, Selection::Unset)
    }
}

/// Compute the pages a selection stands for, in catalog order.
///
/// The bulk path drops every entry the snapshot already covers. A specific
/// selection is taken at face value: the administrator pointed at one page,
/// so no existing-grant check is applied even if the page is already
/// granted.
pub fn resolve(
    selection: &Selection,
    catalog: &Catalog,
    existing: &RegistrySnapshot,
) -> Vec<CatalogEntry> {
    match selection {
        Selection::Unset => Vec::new(),
        Selection::Specific(entry) => vec![entry.clone()],
        Selection::AllRemaining => catalog
            .iter()
            .filter(|entry| !existing.excludes(entry))
            .cloned()
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use navgrant_core::NavNode;

    fn catalog() -> Catalog {
        Catalog::from_forest(&[
            NavNode::page("A", "/a"),
            NavNode::page("B", "/b"),
            NavNode::page("C", "/c"),
        ])
    }

    #[test]
    fn test_unset_resolves_to_nothing() {
        let resolved = resolve(&Selection::Unset, &catalog(), &RegistrySnapshot::empty());
        assert!(resolved.is_empty());
    }

    #[test]
    fn test_all_remaining_drops_granted_pages() {
        let existing = RegistrySnapshot::parse(Some(r#"[{"page": "B", "url": "b"}]"#));
        let resolved = resolve(&Selection::AllRemaining, &catalog(), &existing);

        let titles: Vec<&str> = resolved.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, ["A", "C"]);
    }

    #[test]
    fn test_all_remaining_excludes_on_title_alone() {
        let existing = RegistrySnapshot::parse(Some(r#"[{"page": "A", "url": "different"}]"#));
        let resolved = resolve(&Selection::AllRemaining, &catalog(), &existing);

        assert!(resolved.iter().all(|e| e.title != "A"));
    }

    #[test]
    fn test_all_remaining_with_empty_registry_is_full_catalog() {
        let resolved = resolve(
            &Selection::AllRemaining,
            &catalog(),
            &RegistrySnapshot::empty(),
        );
        assert_eq!(resolved.len(), 3);
    }

    #[test]
    fn test_specific_selection_skips_existing_grant_check() {
        let existing = RegistrySnapshot::parse(Some(r#"[{"page": "B", "url": "b"}]"#));
        let page = CatalogEntry::new("B", "/b");
        let resolved = resolve(&Selection::Specific(page.clone()), &catalog(), &existing);

        assert_eq!(resolved, vec![page]);
    }
}
