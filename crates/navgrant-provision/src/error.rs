//! Error types for selection and payload construction.

use thiserror::Error;

/// Errors that can occur while preparing a grant batch.
#[derive(Debug, Error)]
pub enum ProvisionError {
    /// No page resolved for submission.
    #[error("no pages selected for granting")]
    EmptySelection,
}

/// Result type for provisioning operations.
pub type Result<T> = std::result::Result<T, ProvisionError>;
