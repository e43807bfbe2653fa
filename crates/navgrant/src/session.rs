//! The provisioning session: selection lifecycle over one catalog and one
//! registry snapshot.

use navgrant_client::{
    Authority, PermissionRefresh, SubmissionAck, SubmissionRequest, Submitter,
};
use navgrant_core::{Catalog, CatalogEntry};
use navgrant_provision::{build_payload, resolve, Selection};
use navgrant_registry::RegistrySnapshot;

use crate::error::{Result, SessionError};

/// Session configuration.
///
/// The defaults mirror the console's prefilled form: grants go to the
/// stock user-id list with status `Active` unless the administrator edits
/// them.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// User-id token used by [`ProvisioningSession::submit_with_defaults`].
    pub default_user_ids: String,
    /// Status label used by [`ProvisioningSession::submit_with_defaults`].
    pub default_status: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            default_user_ids: "1,2,3,4,5".to_string(),
            default_status: "Active".to_string(),
        }
    }
}

/// Where the session currently is in the selection lifecycle.
///
/// Exposed so the surrounding UI can disable re-entry while a submission
/// is in flight; the session itself only serializes access through
/// `&mut self`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// No page chosen; submission impossible.
    Unset,
    /// One specific page chosen.
    SpecificSelected,
    /// The bulk "all remaining" option chosen.
    AllSelected,
    /// A submission is in flight.
    Submitting,
}

/// One provisioning operation: a catalog, a registry snapshot, the
/// administrator's selection, and the path to the authority.
///
/// Catalog and snapshot are fixed for the session's lifetime; a console
/// builds a fresh session per screen visit so both are recomputed from
/// current state.
pub struct ProvisioningSession<A: Authority, R: PermissionRefresh> {
    catalog: Catalog,
    existing: RegistrySnapshot,
    selection: Selection,
    submitting: bool,
    config: SessionConfig,
    submitter: Submitter<A, R>,
}

impl<A: Authority, R: PermissionRefresh> ProvisioningSession<A, R> {
    /// Create a session over a flattened catalog and a registry snapshot.
    pub fn new(
        catalog: Catalog,
        existing: RegistrySnapshot,
        submitter: Submitter<A, R>,
        config: SessionConfig,
    ) -> Self {
        Self {
            catalog,
            existing,
            selection: Selection::Unset,
            submitting: false,
            config,
            submitter,
        }
    }

    /// The session's catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The registry snapshot the session was created with.
    pub fn existing(&self) -> &RegistrySnapshot {
        &self.existing
    }

    /// The current selection.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// The session's configuration.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> SessionPhase {
        if self.submitting {
            return SessionPhase::Submitting;
        }
        match self.selection {
            Selection::Unset => SessionPhase::Unset,
            Selection::Specific(_) => SessionPhase::SpecificSelected,
            Selection::AllRemaining => SessionPhase::AllSelected,
        }
    }

    /// Catalog entries not yet covered by an existing grant, in catalog
    /// order. This is the option list a console offers alongside the bulk
    /// choice.
    pub fn available(&self) -> Vec<&CatalogEntry> {
        self.catalog
            .iter()
            .filter(|entry| !self.existing.excludes(entry))
            .collect()
    }

    /// Select a specific page by title (first catalog match).
    pub fn select_page(&mut self, title: &str) -> Result<()> {
        let entry = self
            .catalog
            .find_by_title(title)
            .cloned()
            .ok_or_else(|| SessionError::PageNotFound(title.to_string()))?;

        self.selection = Selection::Specific(entry);
        Ok(())
    }

    /// Select every page not already granted.
    pub fn select_all_remaining(&mut self) {
        self.selection = Selection::AllRemaining;
    }

    /// Return to the unset state.
    pub fn clear_selection(&mut self) {
        self.selection = Selection::Unset;
    }

    /// The pages the current selection would grant, in order. A console
    /// renders this as the preview table before submission.
    pub fn pending(&self) -> Vec<CatalogEntry> {
        resolve(&self.selection, &self.catalog, &self.existing)
    }

    /// Build and submit the batch for the current selection.
    ///
    /// An empty resolution fails with
    /// [`ProvisionError::EmptySelection`](navgrant_provision::ProvisionError)
    /// before any call is made. On success the selection resets to unset
    /// (the surrounding context navigates away from the screen) and the
    /// permission cache has been refreshed. On failure the selection is
    /// left exactly as it was so the administrator can retry.
    pub async fn submit(&mut self, user_ids: &str, status: &str) -> Result<SubmissionAck> {
        let pages = self.pending();
        let batch = build_payload(&pages, user_ids, status)?;

        self.submitting = true;
        let outcome = self.submitter.submit(SubmissionRequest::new(batch)).await;
        self.submitting = false;

        match outcome {
            Ok(ack) => {
                tracing::debug!("provisioned {} page(s)", pages.len());
                self.selection = Selection::Unset;
                Ok(ack)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Submit using the configured default user ids and status.
    pub async fn submit_with_defaults(&mut self) -> Result<SubmissionAck> {
        let user_ids = self.config.default_user_ids.clone();
        let status = self.config.default_status.clone();
        self.submit(&user_ids, &status).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use navgrant_client::memory::{MemoryAuthority, MemoryRefresh};
    use navgrant_core::NavNode;
    use navgrant_provision::ProvisionError;
    use std::sync::Arc;

    fn session_with(
        raw_registry: Option<&str>,
    ) -> (
        ProvisioningSession<Arc<MemoryAuthority>, Arc<MemoryRefresh>>,
        Arc<MemoryAuthority>,
        Arc<MemoryRefresh>,
    ) {
        let catalog = Catalog::from_forest(&[
            NavNode::page("A", "/a"),
            NavNode::page("B", "/b"),
            NavNode::page("C", "/c"),
        ]);
        let authority = MemoryAuthority::new();
        let refresh = MemoryRefresh::new();
        let session = ProvisioningSession::new(
            catalog,
            RegistrySnapshot::parse(raw_registry),
            Submitter::new(authority.clone(), refresh.clone()),
            SessionConfig::default(),
        );
        (session, authority, refresh)
    }

    #[test]
    fn test_available_filters_granted_pages() {
        let (session, _, _) = session_with(Some(r#"[{"page": "B", "url": "b"}]"#));
        let titles: Vec<&str> = session.available().iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, ["A", "C"]);
    }

    #[test]
    fn test_select_unknown_page() {
        let (mut session, _, _) = session_with(None);
        let err = session.select_page("Nope").unwrap_err();
        assert!(matches!(err, SessionError::PageNotFound(_)));
        assert_eq!(session.phase(), SessionPhase::Unset);
    }

    #[test]
    fn test_phase_follows_selection() {
        let (mut session, _, _) = session_with(None);
        assert_eq!(session.phase(), SessionPhase::Unset);

        session.select_page("A").unwrap();
        assert_eq!(session.phase(), SessionPhase::SpecificSelected);

        session.select_all_remaining();
        assert_eq!(session.phase(), SessionPhase::AllSelected);

        session.clear_selection();
        assert_eq!(session.phase(), SessionPhase::Unset);
    }

    #[tokio::test]
    async fn test_submit_without_selection_makes_no_call() {
        let (mut session, authority, refresh) = session_with(None);

        let err = session.submit("7", "Active").await.unwrap_err();
        assert!(matches!(
            err,
            SessionError::Provision(ProvisionError::EmptySelection)
        ));
        assert_eq!(authority.submission_count().await, 0);
        assert_eq!(refresh.invocations().await, 0);
    }

    #[tokio::test]
    async fn test_success_resets_selection() {
        let (mut session, authority, refresh) = session_with(None);

        session.select_page("B").unwrap();
        session.submit("7", "Active").await.unwrap();

        assert_eq!(session.phase(), SessionPhase::Unset);
        assert_eq!(authority.submission_count().await, 1);
        assert_eq!(refresh.invocations().await, 1);
    }

    #[tokio::test]
    async fn test_failure_preserves_selection() {
        let (mut session, authority, refresh) = session_with(None);

        session.select_all_remaining();
        authority.reject_next("nope").await;

        assert!(session.submit("7", "Active").await.is_err());
        assert_eq!(session.phase(), SessionPhase::AllSelected);
        assert_eq!(refresh.invocations().await, 0);

        // The selection survived, so a straight retry works.
        session.submit("7", "Active").await.unwrap();
        assert_eq!(session.phase(), SessionPhase::Unset);
    }

    #[tokio::test]
    async fn test_specific_selection_of_granted_page_submits_anyway() {
        let (mut session, authority, _) = session_with(Some(r#"[{"page": "B", "url": "b"}]"#));

        session.select_page("B").unwrap();
        session.submit("7", "Active").await.unwrap();

        let batches = authority.submissions().await;
        assert_eq!(batches[0].grants[0].page, "B");
    }

    #[tokio::test]
    async fn test_submit_with_defaults_uses_config() {
        let (mut session, authority, _) = session_with(None);

        session.select_page("A").unwrap();
        session.submit_with_defaults().await.unwrap();

        let grant = &authority.submissions().await[0].grants[0];
        assert_eq!(grant.user_ids, "1,2,3,4,5");
        assert_eq!(grant.status, "Active");
    }
}
