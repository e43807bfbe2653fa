//! Error types for the submission seam.

use thiserror::Error;

/// Errors that can occur while submitting a grant batch.
///
/// Callers handle both variants identically: surface the message, leave the
/// selection as it was, let the administrator retry.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The authority returned a non-success response.
    #[error("authority rejected the submission: {message}")]
    Rejected {
        /// Human-readable message from the authority.
        message: String,
    },

    /// The outbound call could not complete.
    #[error("transport error: {0}")]
    Transport(String),
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;
