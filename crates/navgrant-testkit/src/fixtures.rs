//! Test fixtures and helpers.
//!
//! Common setup code for provisioning tests.

use std::sync::Arc;

use navgrant::{ProvisioningSession, SessionConfig, Submitter};
use navgrant_client::memory::{MemoryAuthority, MemoryRefresh};
use navgrant_core::{Catalog, CatalogBuilder, NavNode};
use navgrant_registry::RegistrySnapshot;

/// A miniature console sidebar: grouped sections labeled with `title`,
/// flat sections labeled with `name`.
pub fn console_forest() -> Vec<NavNode> {
    vec![
        NavNode::group(
            "Master",
            vec![
                NavNode::page("Company", "/master/branch"),
                NavNode::page("Bank", "/master/bank"),
                NavNode::page("Buyer", "/master/buyer"),
            ],
        ),
        NavNode::group(
            "Reports",
            vec![NavNode::page("BuyerR", "/report/buyer-report")],
        ),
    ]
}

/// The flat sections of the miniature sidebar.
pub fn flat_sections() -> Vec<NavNode> {
    vec![
        NavNode::named("Dashboard", "/home"),
        NavNode::named("User Management", "/userManagement"),
    ]
}

/// The full fixture catalog: grouped sections followed by flat ones.
pub fn console_catalog() -> Catalog {
    CatalogBuilder::new()
        .section(&console_forest())
        .section(&flat_sections())
        .finish()
}

/// Encode `(page, url)` pairs as serialized registry state.
pub fn registry_json(grants: &[(&str, &str)]) -> String {
    let records: Vec<serde_json::Value> = grants
        .iter()
        .map(|(page, url)| serde_json::json!({ "page": page, "url": url }))
        .collect();
    serde_json::Value::Array(records).to_string()
}

/// A provisioning session wired to in-memory collaborators, with handles
/// kept so tests can inspect what was submitted and refreshed.
pub struct TestFixture {
    pub authority: Arc<MemoryAuthority>,
    pub refresh: Arc<MemoryRefresh>,
    pub session: ProvisioningSession<Arc<MemoryAuthority>, Arc<MemoryRefresh>>,
}

impl TestFixture {
    /// Fixture over the full console catalog and an absent registry.
    pub fn new() -> Self {
        Self::with_registry(None)
    }

    /// Fixture over the full console catalog and the given serialized
    /// registry state.
    pub fn with_registry(raw: Option<&str>) -> Self {
        Self::with_catalog(console_catalog(), raw)
    }

    /// Fixture over an arbitrary catalog.
    pub fn with_catalog(catalog: Catalog, raw: Option<&str>) -> Self {
        let authority = MemoryAuthority::new();
        let refresh = MemoryRefresh::new();
        let session = ProvisioningSession::new(
            catalog,
            RegistrySnapshot::parse(raw),
            Submitter::new(authority.clone(), refresh.clone()),
            SessionConfig::default(),
        );

        Self {
            authority,
            refresh,
            session,
        }
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
