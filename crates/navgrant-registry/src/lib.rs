//! # Navgrant Registry
//!
//! Consumes the externally owned collection of existing access grants.
//!
//! The authoritative grant list lives in an external permission service; the
//! console sees it as a serialized JSON string held in process-wide state.
//! This crate parses that string into an explicit [`RegistrySnapshot`] value
//! that the resolver diffs the catalog against.
//!
//! Parsing never fails the operation: absent or malformed state degrades to
//! an empty snapshot (every page then appears ungranted), with the
//! degradation recorded on the snapshot's [`Provenance`] and logged.

pub mod snapshot;

pub use snapshot::{ExistingGrant, Provenance, RegistrySnapshot};
