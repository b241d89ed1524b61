//! Canopy
//!
//! Canopy is a catalog category-hierarchy resolution and product filtering engine for
//! storefront listings written in Rust.

pub mod categories;
pub mod filter;
pub mod fixtures;
pub mod listing;
pub mod prelude;
pub mod products;
pub mod selection;
pub mod sidebar;
pub mod tree;
pub mod utils;
