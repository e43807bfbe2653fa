//! Error types for provisioning sessions.

use navgrant_client::ClientError;
use navgrant_provision::ProvisionError;
use thiserror::Error;

/// Errors that can occur during a provisioning session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The selected title does not exist in the catalog.
    #[error("page not found in catalog: {0}")]
    PageNotFound(String),

    /// Selection or payload construction failed.
    #[error("provisioning error: {0}")]
    Provision(#[from] ProvisionError),

    /// Submission failed.
    #[error("submission error: {0}")]
    Client(#[from] ClientError),
}

/// Result type for session operations.
pub type Result<T> = std::result::Result<T, SessionError>;
