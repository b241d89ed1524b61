//! Category fixture files

use serde::Deserialize;

use crate::categories::CategoryRecord;

/// Top-level shape of a category fixture file.
#[derive(Debug, Deserialize)]
pub struct CategoriesFixture {
    /// Category records, in catalog order
    pub categories: Vec<CategoryRecord>,
}
