//! Builder for constructing validated category trees.

use petgraph::{algo::is_cyclic_directed, graph::NodeIndex, stable_graph::StableDiGraph};
use rustc_hash::FxHashMap;
use slotmap::SlotMap;
use smallvec::SmallVec;

use crate::{
    categories::{Category, CategoryId, CategoryKey, CategoryRecord},
    tree::{CategoryTree, error::TreeError},
};

/// Builder for a validated [`CategoryTree`].
///
/// Ensures the flat category list satisfies the forest invariants before
/// producing a tree.
#[derive(Debug, Default)]
pub struct CategoryTreeBuilder {
    categories: Vec<Category>,
}

impl CategoryTreeBuilder {
    /// Create a new empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            categories: Vec::new(),
        }
    }

    /// Add a normalized category.
    pub fn add(&mut self, category: Category) -> &mut Self {
        self.categories.push(category);
        self
    }

    /// Add a wire record, normalizing its parent reference and slug.
    pub fn add_record(&mut self, record: CategoryRecord) -> &mut Self {
        self.add(record.into())
    }

    /// Build and validate the category tree.
    ///
    /// # Validation rules
    ///
    /// 1. Category ids must be unique
    /// 2. Category slugs must be unique
    /// 3. The parent relation must be acyclic
    ///
    /// A parent reference to an id outside the set is tolerated: the child is
    /// kept as an orphan root with no incoming edge.
    ///
    /// # Errors
    ///
    /// Returns a [`TreeError`] if any rule is violated.
    pub fn build(self) -> Result<CategoryTree, TreeError> {
        let mut categories: SlotMap<CategoryKey, Category> = SlotMap::with_key();
        let mut by_id: FxHashMap<CategoryId, CategoryKey> = FxHashMap::default();
        let mut by_slug: FxHashMap<String, CategoryKey> = FxHashMap::default();
        let mut order: Vec<CategoryKey> = Vec::with_capacity(self.categories.len());

        for category in self.categories {
            if by_id.contains_key(&category.id) {
                return Err(TreeError::DuplicateId(category.id));
            }

            if by_slug.contains_key(&category.slug) {
                return Err(TreeError::DuplicateSlug(category.slug));
            }

            let id = category.id.clone();
            let slug = category.slug.clone();
            let key = categories.insert(category);

            by_id.insert(id, key);
            by_slug.insert(slug, key);
            order.push(key);
        }

        // Parent -> child adjacency in catalog order. Children referencing an
        // unknown parent stay as orphan roots.
        let mut children: FxHashMap<CategoryKey, SmallVec<[CategoryKey; 5]>> =
            FxHashMap::default();
        let mut roots: Vec<CategoryKey> = Vec::new();

        for &key in &order {
            let parent_key = categories
                .get(key)
                .and_then(|category| category.parent.as_ref())
                .and_then(|parent| by_id.get(parent).copied());

            match parent_key {
                Some(parent_key) => children.entry(parent_key).or_default().push(key),
                None => roots.push(key),
            }
        }

        Self::check_acyclic(&order, &children)?;

        Ok(CategoryTree {
            categories,
            by_id,
            by_slug,
            children,
            roots,
        })
    }

    /// Reject any cycle in the parent relation before queries can run.
    ///
    /// Mirrors the traversal graph into a petgraph digraph so the check stays
    /// a single well-tested algorithm call.
    fn check_acyclic(
        order: &[CategoryKey],
        children: &FxHashMap<CategoryKey, SmallVec<[CategoryKey; 5]>>,
    ) -> Result<(), TreeError> {
        let mut graph: StableDiGraph<CategoryKey, ()> = StableDiGraph::new();
        let mut nodes: FxHashMap<CategoryKey, NodeIndex> = FxHashMap::default();

        for &key in order {
            nodes.insert(key, graph.add_node(key));
        }

        for (&parent, child_keys) in children {
            for &child in child_keys {
                if let (Some(&from), Some(&to)) = (nodes.get(&parent), nodes.get(&child)) {
                    graph.add_edge(from, to, ());
                }
            }
        }

        if is_cyclic_directed(&graph) {
            return Err(TreeError::CycleDetected);
        }

        Ok(())
    }
}
