//! Sidebar tree
//!
//! View-model for the category sidebar: per node, its direct children,
//! whether it is the active selection, and whether it should render expanded.
//! Ancestors of the active selection auto-expand so the selection is always
//! visible.

use rustc_hash::FxHashSet;

use crate::{
    categories::{Category, CategoryId},
    selection::CategorySelection,
    tree::CategoryTree,
};

/// A category node prepared for sidebar rendering.
#[derive(Debug)]
pub struct SidebarNode<'a> {
    /// The category this node renders
    pub category: &'a Category,

    /// The selection equals this node's slug or id
    pub is_selected: bool,

    /// This node is the selection or an ancestor of it
    pub is_expanded: bool,

    /// Direct children, in catalog order
    pub children: Vec<SidebarNode<'a>>,
}

/// Build the sidebar view of the whole category tree for a selection.
#[must_use]
pub fn sidebar_tree<'a>(
    tree: &'a CategoryTree,
    selection: &CategorySelection,
) -> Vec<SidebarNode<'a>> {
    let selected = match selection {
        CategorySelection::All => None,
        CategorySelection::Key(key) => Some(tree.resolve(key)),
    };

    let expanded = selected
        .as_ref()
        .map_or_else(FxHashSet::default, |id| ancestor_chain(tree, id));

    tree.roots()
        .map(|category| build_node(tree, category, selection, &expanded))
        .collect()
}

fn build_node<'a>(
    tree: &'a CategoryTree,
    category: &'a Category,
    selection: &CategorySelection,
    expanded: &FxHashSet<CategoryId>,
) -> SidebarNode<'a> {
    let is_selected = match selection {
        CategorySelection::All => false,
        CategorySelection::Key(key) => {
            key == &category.slug || key.as_str() == category.id.as_str()
        }
    };

    let is_expanded = is_selected || expanded.contains(&category.id);

    let children = tree
        .children(&category.id)
        .map(|child| build_node(tree, child, selection, expanded))
        .collect();

    SidebarNode {
        category,
        is_selected,
        is_expanded,
        children,
    }
}

/// The selected id plus every id on its parent chain.
///
/// A node expands exactly when the selection falls inside its subtree, which
/// is the same as the node sitting on this chain. The walk is guarded against
/// repeated ids so it terminates on any input.
fn ancestor_chain(tree: &CategoryTree, id: &CategoryId) -> FxHashSet<CategoryId> {
    let mut chain = FxHashSet::default();
    let mut current = Some(id.clone());

    while let Some(id) = current {
        if !chain.insert(id.clone()) {
            break;
        }

        current = tree.get(&id).and_then(|category| category.parent.clone());
    }

    chain
}
