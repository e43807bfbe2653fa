//! Proptest generators for property-based testing.

use proptest::prelude::*;

use navgrant_core::NavNode;

/// Generate a page title.
pub fn page_title() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{0,11}".prop_map(String::from)
}

/// Generate an absolute page url.
pub fn page_url() -> impl Strategy<Value = String> {
    ("[a-z]{1,8}", "[a-z][a-z-]{0,11}").prop_map(|(section, page)| format!("/{section}/{page}"))
}

/// Generate a navigation node: pages, group headers, and pages that also
/// carry children, nested a few levels deep.
pub fn nav_node() -> impl Strategy<Value = NavNode> {
    let leaf = prop_oneof![
        (page_title(), page_url()).prop_map(|(title, url)| NavNode::page(title, url)),
        (page_title(), page_url()).prop_map(|(name, url)| NavNode::named(name, url)),
    ];

    leaf.prop_recursive(3, 24, 4, |inner| {
        (
            page_title(),
            prop::option::of(page_url()),
            prop::collection::vec(inner, 0..4),
        )
            .prop_map(|(title, url, items)| match url {
                Some(url) => NavNode::page(title, url).with_items(items),
                None => NavNode::group(title, items),
            })
    })
}

/// Generate a navigation forest.
pub fn nav_forest() -> impl Strategy<Value = Vec<NavNode>> {
    prop::collection::vec(nav_node(), 0..6)
}
