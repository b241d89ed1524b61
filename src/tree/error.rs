//! Tree errors

use thiserror::Error;

use crate::categories::CategoryId;

/// Errors that can occur when building a category tree.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TreeError {
    /// Two categories share the same id.
    #[error("duplicate category id: {0}")]
    DuplicateId(CategoryId),

    /// Two categories share the same slug.
    #[error("duplicate category slug: {0}")]
    DuplicateSlug(String),

    /// The parent relation contains a cycle.
    #[error("category parent relation contains a cycle")]
    CycleDetected,
}
