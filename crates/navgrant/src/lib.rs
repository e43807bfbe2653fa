//! # Navgrant
//!
//! Navigation-derived access provisioning for administrative consoles.
//!
//! ## Overview
//!
//! A console exposes its pages through a static, nested navigation
//! definition. Navgrant turns that definition into the full provisioning
//! flow:
//!
//! - **Catalog**: flatten the definition into the ordered list of
//!   grantable pages
//! - **Registry**: parse the externally supplied list of existing grants,
//!   tolerating malformed state
//! - **Selection**: resolve "this page" or "everything still ungranted"
//!   into concrete pages
//! - **Submission**: build the grant batch and send it to the external
//!   authority, refreshing the cached permission state on success
//!
//! ## Usage
//!
//! ```rust,no_run
//! use navgrant::{ProvisioningSession, SessionConfig};
//! use navgrant::core::{Catalog, NavNode};
//! use navgrant::registry::RegistrySnapshot;
//! use navgrant::client::{memory::{MemoryAuthority, MemoryRefresh}, Submitter};
//!
//! async fn example(raw_registry: Option<&str>) {
//!     let forest = vec![NavNode::group(
//!         "Master",
//!         vec![NavNode::page("Bank", "/master/bank")],
//!     )];
//!
//!     let mut session = ProvisioningSession::new(
//!         Catalog::from_forest(&forest),
//!         RegistrySnapshot::parse(raw_registry),
//!         Submitter::new(MemoryAuthority::new(), MemoryRefresh::new()),
//!         SessionConfig::default(),
//!     );
//!
//!     session.select_all_remaining();
//!     let ack = session.submit("7", "Active").await.unwrap();
//!     println!("{:?}", ack.message);
//! }
//! ```
//!
//! ## Re-exports
//!
//! This crate re-exports the component crates for convenience:
//!
//! - `navgrant::core` - Navigation types and catalog flattening
//! - `navgrant::registry` - Existing-grant snapshot parsing
//! - `navgrant::provision` - Selection resolution and payload building
//! - `navgrant::client` - Authority seam and batch submitter

pub mod error;
pub mod session;

// Re-export component crates
pub use navgrant_client as client;
pub use navgrant_core as core;
pub use navgrant_provision as provision;
pub use navgrant_registry as registry;

// Re-export main types for convenience
pub use error::{Result, SessionError};
pub use session::{ProvisioningSession, SessionConfig, SessionPhase};

// Re-export commonly used component types
pub use navgrant_client::{Authority, PermissionRefresh, SubmissionAck, SubmissionRequest, Submitter};
pub use navgrant_core::{Catalog, CatalogBuilder, CatalogEntry, NavNode};
pub use navgrant_provision::{GrantRequest, Selection};
pub use navgrant_registry::{ExistingGrant, Provenance, RegistrySnapshot};
