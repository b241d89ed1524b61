//! Listing filter
//!
//! Combines the active flag, free-text search and category-subtree membership
//! into the single predicate a product listing applies. Filtering is pure and
//! order-preserving; sorting stays with the caller.

use rustc_hash::FxHashSet;

use crate::{
    categories::CategoryId, products::Product, selection::CategorySelection, tree::CategoryTree,
};

/// Filter state for a product listing view.
#[derive(Debug, Clone, Default)]
pub struct ListingFilter {
    /// Category selection, `All` by default
    pub category: CategorySelection,

    /// Case-insensitive substring matched against product name or description
    pub search: String,
}

impl ListingFilter {
    /// Create a filter from a selection and a raw search query.
    pub fn new(category: CategorySelection, search: impl Into<String>) -> Self {
        Self {
            category,
            search: search.into(),
        }
    }

    /// Test a single product against all three predicates.
    #[must_use]
    pub fn matches(&self, product: &Product, tree: &CategoryTree) -> bool {
        product.is_active
            && matches_search(product, &self.search)
            && CategoryScope::resolve(&self.category, tree).contains(product)
    }

    /// Apply the filter, preserving input order.
    ///
    /// The category scope is resolved once per call; each product is then a
    /// set-membership test rather than a fresh tree walk. Predicates run
    /// cheapest first.
    #[must_use]
    pub fn apply<'a>(&self, products: &'a [Product], tree: &CategoryTree) -> Vec<&'a Product> {
        let scope = CategoryScope::resolve(&self.category, tree);

        products
            .iter()
            .filter(|product| product.is_active)
            .filter(|product| matches_search(product, &self.search))
            .filter(|product| scope.contains(product))
            .collect()
    }
}

/// The resolved set of category ids a selection covers.
#[derive(Debug, Clone)]
pub enum CategoryScope {
    /// Every product is in scope
    All,

    /// Only products whose category id is in the set
    Subtree(FxHashSet<CategoryId>),
}

impl CategoryScope {
    /// Resolve a selection against the tree: slug-or-id resolution followed
    /// by a descendant-set computation.
    #[must_use]
    pub fn resolve(selection: &CategorySelection, tree: &CategoryTree) -> Self {
        match selection {
            CategorySelection::All => Self::All,
            CategorySelection::Key(key) => {
                let id = tree.resolve(key);
                Self::Subtree(tree.descendant_ids(&id))
            }
        }
    }

    /// Whether a product's category falls inside this scope.
    ///
    /// A product with no category only matches the `All` scope.
    #[must_use]
    pub fn contains(&self, product: &Product) -> bool {
        match self {
            Self::All => true,
            Self::Subtree(ids) => product
                .category_id
                .as_ref()
                .is_some_and(|id| ids.contains(id)),
        }
    }
}

/// Whether a product belongs to the selected category or any of its
/// descendants.
#[must_use]
pub fn matches_category(
    product: &Product,
    selection: &CategorySelection,
    tree: &CategoryTree,
) -> bool {
    CategoryScope::resolve(selection, tree).contains(product)
}

/// Case-insensitive substring match against product name or description.
///
/// An empty query matches everything.
#[must_use]
pub fn matches_search(product: &Product, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }

    let needle = query.to_lowercase();

    product.name.to_lowercase().contains(&needle)
        || product.description.to_lowercase().contains(&needle)
}
