//! Authority and refresh trait seams.
//!
//! The real console wires these to its HTTP layer and its permission cache.
//! Implementations must be thread-safe (Send + Sync).

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::Result;
use crate::messages::{SubmissionAck, SubmissionRequest};

/// The external authority that durably records grants.
#[async_trait]
pub trait Authority: Send + Sync {
    /// Submit one batch of grant records.
    ///
    /// Returns the authority's acknowledgement, or an error when the batch
    /// was rejected or the call could not complete. The authority's
    /// atomicity guarantee is unspecified; callers treat the batch as a
    /// single unit of intent either way.
    async fn submit(&self, request: &SubmissionRequest) -> Result<SubmissionAck>;
}

/// Capability that refreshes the console's cached permission state.
///
/// Invoked after a successful submission so subsequent reads of the
/// existing-grants source reflect the new grants. No return value is
/// consumed.
#[async_trait]
pub trait PermissionRefresh: Send + Sync {
    /// Trigger a refresh of the cached permission state.
    async fn refresh(&self);
}

#[async_trait]
impl<A: Authority + ?Sized> Authority for Arc<A> {
    async fn submit(&self, request: &SubmissionRequest) -> Result<SubmissionAck> {
        (**self).submit(request).await
    }
}

#[async_trait]
impl<R: PermissionRefresh + ?Sized> PermissionRefresh for Arc<R> {
    async fn refresh(&self) {
        (**self).refresh().await;
    }
}

/// In-memory implementations for testing.
pub mod memory {
    use super::*;
    use tokio::sync::RwLock;

    use crate::error::ClientError;

    /// Records submitted batches; can be scripted to fail the next call.
    #[derive(Debug, Default)]
    pub struct MemoryAuthority {
        submissions: RwLock<Vec<SubmissionRequest>>,
        failure: RwLock<Option<ClientError>>,
    }

    impl MemoryAuthority {
        /// Create a shared in-memory authority.
        pub fn new() -> Arc<Self> {
            Arc::new(Self::default())
        }

        /// Make the next submission fail as rejected by the authority.
        pub async fn reject_next(&self, message: impl Into<String>) {
            *self.failure.write().await = Some(ClientError::Rejected {
                message: message.into(),
            });
        }

        /// Make the next submission fail at the transport level.
        pub async fn fail_next_transport(&self, message: impl Into<String>) {
            *self.failure.write().await = Some(ClientError::Transport(message.into()));
        }

        /// All batches accepted so far, in submission order.
        pub async fn submissions(&self) -> Vec<SubmissionRequest> {
            self.submissions.read().await.clone()
        }

        /// Number of accepted batches.
        pub async fn submission_count(&self) -> usize {
            self.submissions.read().await.len()
        }
    }

    #[async_trait]
    impl Authority for MemoryAuthority {
        async fn submit(&self, request: &SubmissionRequest) -> Result<SubmissionAck> {
            if let Some(failure) = self.failure.write().await.take() {
                return Err(failure);
            }

            self.submissions.write().await.push(request.clone());
            Ok(SubmissionAck::with_message(format!(
                "{} grant(s) recorded",
                request.len()
            )))
        }
    }

    /// Counts refresh invocations.
    #[derive(Debug, Default)]
    pub struct MemoryRefresh {
        invocations: RwLock<usize>,
    }

    impl MemoryRefresh {
        /// Create a shared refresh counter.
        pub fn new() -> Arc<Self> {
            Arc::new(Self::default())
        }

        /// How many times the refresh fired.
        pub async fn invocations(&self) -> usize {
            *self.invocations.read().await
        }
    }

    #[async_trait]
    impl PermissionRefresh for MemoryRefresh {
        async fn refresh(&self) {
            *self.invocations.write().await += 1;
        }
    }
}
