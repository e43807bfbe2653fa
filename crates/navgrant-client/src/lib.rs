//! # Navgrant Client
//!
//! The seam between provisioning and the external grant authority.
//!
//! ## Overview
//!
//! - [`Authority`]: transport-agnostic submission endpoint. Implementations
//!   may speak HTTP, a message bus, or anything else; this crate only
//!   defines the contract and ships an in-memory implementation for tests.
//! - [`PermissionRefresh`]: the capability invoked after a successful
//!   submission so the console's cached permission state catches up with
//!   the new grants. Injected, never reached through ambient state.
//! - [`Submitter`]: drives one batch through the authority and fires the
//!   refresh exactly once on success.
//!
//! A batch is a single unit of intent: on failure nothing is assumed
//! committed and nothing is retried or rolled back here.

pub mod authority;
pub mod error;
pub mod messages;
pub mod submitter;

pub use authority::{memory, Authority, PermissionRefresh};
pub use error::{ClientError, Result};
pub use messages::{SubmissionAck, SubmissionRequest};
pub use submitter::Submitter;
