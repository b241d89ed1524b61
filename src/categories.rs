//! Categories

use std::fmt;

use serde::{Deserialize, Serialize};
use slotmap::new_key_type;

new_key_type! {
    /// Category Key
    pub struct CategoryKey;
}

/// Opaque category identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(String);

impl CategoryId {
    /// Create a new category id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CategoryId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for CategoryId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Wire form of a parent reference.
///
/// The catalog API sometimes sends a bare id and sometimes a populated parent
/// object carrying its own `id` field. Both normalize to the bare id once at
/// load time, so comparisons never need to inspect the shape again.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParentRef {
    /// Bare id reference
    Id(CategoryId),

    /// Populated parent object; only the id is retained
    Populated {
        /// The parent category's id
        id: CategoryId,
    },
}

impl ParentRef {
    /// Normalize to the bare parent id.
    #[must_use]
    pub fn into_id(self) -> CategoryId {
        match self {
            Self::Id(id) | Self::Populated { id } => id,
        }
    }
}

/// Category record as delivered by the catalog API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRecord {
    /// Opaque unique identifier
    pub id: CategoryId,

    /// Human-readable alternate key; falls back to the id when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,

    /// Display label
    pub name: String,

    /// Parent reference, absent for a root category
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<ParentRef>,
}

/// A category with its parent reference normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    /// Opaque unique identifier
    pub id: CategoryId,

    /// Human-readable alternate key, unique within a catalog
    pub slug: String,

    /// Display label
    pub name: String,

    /// Parent category id, `None` for a root category
    pub parent: Option<CategoryId>,
}

impl Category {
    /// Create a category with an explicit parent.
    pub fn new(
        id: impl Into<CategoryId>,
        slug: impl Into<String>,
        name: impl Into<String>,
        parent: Option<CategoryId>,
    ) -> Self {
        Self {
            id: id.into(),
            slug: slug.into(),
            name: name.into(),
            parent,
        }
    }

    /// Create a root category.
    pub fn root(
        id: impl Into<CategoryId>,
        slug: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self::new(id, slug, name, None)
    }
}

impl From<CategoryRecord> for Category {
    fn from(record: CategoryRecord) -> Self {
        let slug = record
            .slug
            .unwrap_or_else(|| record.id.as_str().to_string());

        Self {
            id: record.id,
            slug,
            name: record.name,
            parent: record.parent_id.map(ParentRef::into_id),
        }
    }
}
