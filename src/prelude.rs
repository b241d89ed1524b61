//! Canopy prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    categories::{Category, CategoryId, CategoryKey, CategoryRecord, ParentRef},
    filter::{CategoryScope, ListingFilter, matches_category, matches_search},
    fixtures::{Fixture, FixtureError},
    listing::render_listing,
    products::{Product, ProductId},
    selection::{ALL_SENTINEL, CategorySelection},
    sidebar::{SidebarNode, sidebar_tree},
    tree::{CategoryTree, CategoryTreeBuilder, TreeError},
};
