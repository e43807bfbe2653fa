//! # Navgrant Testkit
//!
//! Testing utilities for Navgrant.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Fixtures**: a miniature console sidebar, a registry-state builder,
//!   and a ready-wired provisioning session over in-memory collaborators
//! - **Generators**: proptest strategies for arbitrary navigation forests
//!
//! ## Test Fixtures
//!
//! Quickly set up a provisioning scenario:
//!
//! ```rust
//! use navgrant_testkit::fixtures::{registry_json, TestFixture};
//!
//! let raw = registry_json(&[("Bank", "master/bank")]);
//! let fixture = TestFixture::with_registry(Some(&raw));
//! assert_eq!(fixture.session.available().len(), fixture.session.catalog().len() - 1);
//! ```
//!
//! ## Property Testing
//!
//! Use the generators with proptest:
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use navgrant_core::Catalog;
//! use navgrant_testkit::generators::nav_forest;
//!
//! proptest! {
//!     #[test]
//!     fn flattening_is_deterministic(forest in nav_forest()) {
//!         prop_assert_eq!(Catalog::from_forest(&forest), Catalog::from_forest(&forest));
//!     }
//! }
//! ```

pub mod fixtures;
pub mod generators;

pub use fixtures::{console_forest, registry_json, TestFixture};
pub use generators::{nav_forest, nav_node, page_title, page_url};
