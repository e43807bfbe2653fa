//! # Navgrant Core
//!
//! Core primitives for navigation-derived access provisioning.
//!
//! ## Overview
//!
//! The surrounding console exposes its pages through a static, nested
//! navigation definition. This crate models that definition and flattens it
//! into a **catalog**: the ordered list of navigable pages that can be
//! granted to users.
//!
//! - [`NavNode`]: one node of the navigation definition (page, group
//!   header, or both)
//! - [`CatalogEntry`]: a single navigable page
//! - [`Catalog`] / [`CatalogBuilder`]: the flattened page list
//!
//! Flattening is a pure function of the definition: the same forest always
//! produces the same catalog, in pre-order traversal order.

pub mod catalog;
pub mod types;

pub use catalog::{Catalog, CatalogBuilder};
pub use types::{normalize_url, CatalogEntry, NavNode, GROUP_SENTINEL};
