//! Category Tree
//!
//! An arena-backed view of the catalog's category hierarchy. The flat list
//! delivered by the catalog API is normalized once into a parent -> children
//! adjacency, so each subtree query walks only the subtree instead of
//! re-scanning the full list.

use rustc_hash::{FxHashMap, FxHashSet};
use slotmap::SlotMap;
use smallvec::{SmallVec, smallvec};

use crate::categories::{Category, CategoryId, CategoryKey, CategoryRecord};

pub mod builder;
pub mod error;

pub use builder::CategoryTreeBuilder;
pub use error::TreeError;

/// A validated category hierarchy ready for descendant queries.
#[derive(Debug)]
pub struct CategoryTree {
    pub(crate) categories: SlotMap<CategoryKey, Category>,
    pub(crate) by_id: FxHashMap<CategoryId, CategoryKey>,
    pub(crate) by_slug: FxHashMap<String, CategoryKey>,
    pub(crate) children: FxHashMap<CategoryKey, SmallVec<[CategoryKey; 5]>>,
    pub(crate) roots: Vec<CategoryKey>,
}

impl CategoryTree {
    /// Build a tree from wire records.
    ///
    /// # Errors
    ///
    /// Returns a [`TreeError`] if the records fail validation.
    pub fn from_records(
        records: impl IntoIterator<Item = CategoryRecord>,
    ) -> Result<Self, TreeError> {
        let mut builder = CategoryTreeBuilder::new();

        for record in records {
            builder.add_record(record);
        }

        builder.build()
    }

    /// Build a tree from normalized categories.
    ///
    /// # Errors
    ///
    /// Returns a [`TreeError`] if the categories fail validation.
    pub fn from_categories(
        categories: impl IntoIterator<Item = Category>,
    ) -> Result<Self, TreeError> {
        let mut builder = CategoryTreeBuilder::new();

        for category in categories {
            builder.add(category);
        }

        builder.build()
    }

    /// Resolve a selection key that may be a slug or an id.
    ///
    /// Slug matches win. Unknown keys pass through unchanged so listings
    /// degrade to an empty match instead of failing while the category list
    /// is still loading.
    #[must_use]
    pub fn resolve(&self, key: &str) -> CategoryId {
        match self
            .by_slug
            .get(key)
            .and_then(|&slug_key| self.categories.get(slug_key))
        {
            Some(category) => category.id.clone(),
            None => CategoryId::new(key),
        }
    }

    /// The ids of `id` and all of its transitive descendants.
    ///
    /// Always contains `id` itself, even when no such category exists. The
    /// walk keeps its own visited set, so a malformed graph that slipped past
    /// build-time validation still cannot loop it.
    #[must_use]
    pub fn descendant_ids(&self, id: &CategoryId) -> FxHashSet<CategoryId> {
        let mut ids = FxHashSet::default();
        ids.insert(id.clone());

        let Some(&start) = self.by_id.get(id) else {
            return ids;
        };

        let mut visited: FxHashSet<CategoryKey> = FxHashSet::default();
        let mut stack: SmallVec<[CategoryKey; 8]> = smallvec![start];

        while let Some(key) = stack.pop() {
            if !visited.insert(key) {
                continue;
            }

            if let Some(category) = self.categories.get(key) {
                ids.insert(category.id.clone());
            }

            if let Some(child_keys) = self.children.get(&key) {
                stack.extend(child_keys.iter().copied());
            }
        }

        ids
    }

    /// Direct children of `id`, in catalog order.
    pub fn children(&self, id: &CategoryId) -> impl Iterator<Item = &Category> {
        self.by_id
            .get(id)
            .and_then(|key| self.children.get(key))
            .into_iter()
            .flatten()
            .filter_map(|&key| self.categories.get(key))
    }

    /// Root categories, in catalog order.
    ///
    /// Includes orphans whose parent id is not in the catalog.
    pub fn roots(&self) -> impl Iterator<Item = &Category> {
        self.roots
            .iter()
            .filter_map(|&key| self.categories.get(key))
    }

    /// Look up a category by id.
    #[must_use]
    pub fn get(&self, id: &CategoryId) -> Option<&Category> {
        self.by_id
            .get(id)
            .and_then(|&key| self.categories.get(key))
    }

    /// Look up a category by slug.
    #[must_use]
    pub fn get_by_slug(&self, slug: &str) -> Option<&Category> {
        self.by_slug
            .get(slug)
            .and_then(|&key| self.categories.get(key))
    }

    /// Whether a category with this id exists.
    #[must_use]
    pub fn contains(&self, id: &CategoryId) -> bool {
        self.by_id.contains_key(id)
    }

    /// Number of categories in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Whether the tree holds no categories.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn power_tool_categories() -> Vec<Category> {
        vec![
            Category::root("A", "tools", "Tools"),
            Category::new("B", "drills", "Drills", Some(CategoryId::from("A"))),
            Category::new("C", "bits", "Bits", Some(CategoryId::from("B"))),
            Category::new("D", "saws", "Saws", Some(CategoryId::from("A"))),
            Category::root("E", "clearance", "Clearance"),
        ]
    }

    fn ids(set: &FxHashSet<CategoryId>) -> Vec<&str> {
        let mut ids: Vec<&str> = set.iter().map(CategoryId::as_str).collect();
        ids.sort_unstable();
        ids
    }

    #[test]
    fn leaf_descendants_are_just_itself() -> TestResult {
        let tree = CategoryTree::from_categories(power_tool_categories())?;

        assert_eq!(
            ids(&tree.descendant_ids(&CategoryId::from("C"))),
            ["C"],
            "a leaf's descendant set is itself"
        );

        Ok(())
    }

    #[test]
    fn descendants_cover_the_whole_subtree() -> TestResult {
        let tree = CategoryTree::from_categories(power_tool_categories())?;

        assert_eq!(
            ids(&tree.descendant_ids(&CategoryId::from("A"))),
            ["A", "B", "C", "D"],
            "root subtree should include all transitive children"
        );
        assert_eq!(
            ids(&tree.descendant_ids(&CategoryId::from("B"))),
            ["B", "C"],
            "mid-level subtree should stop at its own children"
        );

        Ok(())
    }

    #[test]
    fn unknown_id_still_yields_itself() -> TestResult {
        let tree = CategoryTree::from_categories(power_tool_categories())?;

        assert_eq!(
            ids(&tree.descendant_ids(&CategoryId::from("nope"))),
            ["nope"],
            "unknown ids degrade to a singleton set"
        );

        Ok(())
    }

    #[test]
    fn resolve_prefers_slug_over_id() -> TestResult {
        // "blue" is one category's slug and another category's id.
        let tree = CategoryTree::from_categories(vec![
            Category::root("red", "blue", "Red"),
            Category::root("blue", "azure", "Blue"),
        ])?;

        assert_eq!(
            tree.resolve("blue"),
            CategoryId::from("red"),
            "slug match should win over id match"
        );
        assert_eq!(
            tree.resolve("azure"),
            CategoryId::from("blue"),
            "slug resolution should return the owning id"
        );

        Ok(())
    }

    #[test]
    fn resolve_passes_unknown_keys_through() -> TestResult {
        let tree = CategoryTree::from_categories(power_tool_categories())?;

        assert_eq!(
            tree.resolve("widgets"),
            CategoryId::from("widgets"),
            "unknown keys should pass through unchanged"
        );

        Ok(())
    }

    #[test]
    fn slug_and_id_resolution_agree_on_descendants() -> TestResult {
        let tree = CategoryTree::from_categories(power_tool_categories())?;

        let by_slug = tree.descendant_ids(&tree.resolve("drills"));
        let by_id = tree.descendant_ids(&tree.resolve("B"));

        assert_eq!(
            ids(&by_slug),
            ids(&by_id),
            "slug and id routes should reach the same subtree"
        );

        Ok(())
    }

    #[test]
    fn children_preserve_catalog_order() -> TestResult {
        let tree = CategoryTree::from_categories(power_tool_categories())?;

        let names: Vec<&str> = tree
            .children(&CategoryId::from("A"))
            .map(|category| category.name.as_str())
            .collect();

        assert_eq!(names, ["Drills", "Saws"], "children should keep catalog order");

        Ok(())
    }

    #[test]
    fn orphan_parent_is_kept_as_root() -> TestResult {
        let tree = CategoryTree::from_categories(vec![
            Category::root("A", "tools", "Tools"),
            Category::new("B", "drills", "Drills", Some(CategoryId::from("missing"))),
        ])?;

        let roots: Vec<&str> = tree.roots().map(|category| category.id.as_str()).collect();

        assert_eq!(roots, ["A", "B"], "dangling parent should leave the child a root");
        assert_eq!(
            ids(&tree.descendant_ids(&CategoryId::from("B"))),
            ["B"],
            "orphan subtree should still be traversable"
        );

        Ok(())
    }

    #[test]
    fn duplicate_id_is_rejected() {
        let result = CategoryTree::from_categories(vec![
            Category::root("A", "tools", "Tools"),
            Category::root("A", "other", "Other"),
        ]);

        assert_eq!(
            result.err(),
            Some(TreeError::DuplicateId(CategoryId::from("A"))),
            "duplicate ids should fail validation"
        );
    }

    #[test]
    fn duplicate_slug_is_rejected() {
        let result = CategoryTree::from_categories(vec![
            Category::root("A", "tools", "Tools"),
            Category::root("B", "tools", "More Tools"),
        ]);

        assert_eq!(
            result.err(),
            Some(TreeError::DuplicateSlug("tools".to_string())),
            "duplicate slugs should fail validation"
        );
    }

    #[test]
    fn parent_cycle_is_rejected() {
        let result = CategoryTree::from_categories(vec![
            Category::new("A", "tools", "Tools", Some(CategoryId::from("B"))),
            Category::new("B", "drills", "Drills", Some(CategoryId::from("A"))),
        ]);

        assert_eq!(
            result.err(),
            Some(TreeError::CycleDetected),
            "a two-node parent cycle should fail validation"
        );
    }

    #[test]
    fn self_parent_is_rejected() {
        let result = CategoryTree::from_categories(vec![Category::new(
            "A",
            "tools",
            "Tools",
            Some(CategoryId::from("A")),
        )]);

        assert_eq!(
            result.err(),
            Some(TreeError::CycleDetected),
            "a self-referencing parent should fail validation"
        );
    }
}
