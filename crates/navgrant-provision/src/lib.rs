//! # Navgrant Provision
//!
//! Turns an administrator's selection into a batch of grant records.
//!
//! ## Overview
//!
//! - [`Selection`]: the administrator's intent — nothing yet, one specific
//!   page, or every page not already granted
//! - [`resolve`]: the candidate pages for a selection, diffed against the
//!   registry snapshot on the bulk path
//! - [`GrantRequest`] / [`build_payload`]: the outbound batch, one record
//!   per page with the shared user-id token and status label copied into
//!   each
//!
//! Resolution and payload construction are pure; nothing here talks to the
//! outside world.

pub mod error;
pub mod payload;
pub mod selection;

pub use error::{ProvisionError, Result};
pub use payload::{build_payload, GrantRequest};
pub use selection::{resolve, Selection};
