//! Batch submission driver.

use crate::authority::{Authority, PermissionRefresh};
use crate::error::Result;
use crate::messages::{SubmissionAck, SubmissionRequest};

/// Sends grant batches to the authority and keeps the permission cache in
/// step.
///
/// Both collaborators are injected at construction; the submitter itself
/// holds no other state, so it can be shared for the lifetime of a
/// provisioning session.
pub struct Submitter<A: Authority, R: PermissionRefresh> {
    authority: A,
    refresh: R,
}

impl<A: Authority, R: PermissionRefresh> Submitter<A, R> {
    /// Create a submitter over the given collaborators.
    pub fn new(authority: A, refresh: R) -> Self {
        Self { authority, refresh }
    }

    /// Submit one batch.
    ///
    /// On success the permission-cache refresh fires exactly once before
    /// the acknowledgement is returned. On failure the error is returned
    /// untouched: nothing is assumed committed, nothing is retried, and the
    /// refresh does not fire.
    pub async fn submit(&self, request: SubmissionRequest) -> Result<SubmissionAck> {
        let ack = self.authority.submit(&request).await?;

        tracing::debug!("submitted {} grant(s)", request.len());
        self.refresh.refresh().await;

        Ok(ack)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::authority::memory::{MemoryAuthority, MemoryRefresh};
    use crate::error::ClientError;

    use navgrant_core::CatalogEntry;
    use navgrant_provision::build_payload;

    fn batch() -> SubmissionRequest {
        let pages = [CatalogEntry::new("A", "/a"), CatalogEntry::new("C", "/c")];
        SubmissionRequest::new(build_payload(&pages, "7", "Active").unwrap())
    }

    #[tokio::test]
    async fn test_success_records_batch_and_refreshes_once() {
        let authority = MemoryAuthority::new();
        let refresh = MemoryRefresh::new();
        let submitter = Submitter::new(authority.clone(), refresh.clone());

        let ack = submitter.submit(batch()).await.unwrap();

        assert!(ack.message.is_some());
        assert_eq!(authority.submission_count().await, 1);
        assert_eq!(authority.submissions().await[0].len(), 2);
        assert_eq!(refresh.invocations().await, 1);
    }

    #[tokio::test]
    async fn test_rejection_skips_refresh() {
        let authority = MemoryAuthority::new();
        let refresh = MemoryRefresh::new();
        let submitter = Submitter::new(authority.clone(), refresh.clone());

        authority.reject_next("quota exceeded").await;
        let err = submitter.submit(batch()).await.unwrap_err();

        assert!(matches!(err, ClientError::Rejected { ref message } if message == "quota exceeded"));
        assert_eq!(authority.submission_count().await, 0);
        assert_eq!(refresh.invocations().await, 0);
    }

    #[tokio::test]
    async fn test_transport_failure_skips_refresh() {
        let authority = MemoryAuthority::new();
        let refresh = MemoryRefresh::new();
        let submitter = Submitter::new(authority.clone(), refresh.clone());

        authority.fail_next_transport("connection reset").await;
        let err = submitter.submit(batch()).await.unwrap_err();

        assert!(matches!(err, ClientError::Transport(_)));
        assert_eq!(refresh.invocations().await, 0);
    }

    #[tokio::test]
    async fn test_failure_is_transient() {
        let authority = MemoryAuthority::new();
        let refresh = MemoryRefresh::new();
        let submitter = Submitter::new(authority.clone(), refresh.clone());

        authority.reject_next("busy").await;
        assert!(submitter.submit(batch()).await.is_err());

        // The scripted failure is consumed; a retry goes through.
        submitter.submit(batch()).await.unwrap();
        assert_eq!(authority.submission_count().await, 1);
        assert_eq!(refresh.invocations().await, 1);
    }
}
