//! Fixtures
//!
//! File-based catalog fixture sets used by the demos and integration tests.
//! A set is a pair of YAML files under a base directory:
//! `categories/<name>.yml` and `products/<name>.yml`.

use std::{
    fs,
    path::{Path, PathBuf},
};

use thiserror::Error;

use crate::{
    products::Product,
    tree::{CategoryTree, TreeError},
};

pub mod categories;
pub mod products;

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// The category set failed tree validation
    #[error(transparent)]
    Tree(#[from] TreeError),
}

/// A loaded fixture set: a validated category tree plus its products.
#[derive(Debug)]
pub struct Fixture {
    base_path: PathBuf,
    tree: CategoryTree,
    products: Vec<Product>,
}

impl Fixture {
    /// Load the named set from the default `./fixtures` directory.
    ///
    /// # Errors
    ///
    /// Returns a [`FixtureError`] if either file cannot be read or parsed, or
    /// if the category set fails tree validation.
    pub fn from_set(name: &str) -> Result<Self, FixtureError> {
        Self::from_set_in("./fixtures", name)
    }

    /// Load the named set from a custom base directory.
    ///
    /// # Errors
    ///
    /// Returns a [`FixtureError`] if either file cannot be read or parsed, or
    /// if the category set fails tree validation.
    pub fn from_set_in(base_path: impl Into<PathBuf>, name: &str) -> Result<Self, FixtureError> {
        let base_path = base_path.into();

        let categories_path = base_path.join("categories").join(format!("{name}.yml"));
        let contents = fs::read_to_string(&categories_path)?;
        let categories: categories::CategoriesFixture = serde_norway::from_str(&contents)?;
        let tree = CategoryTree::from_records(categories.categories)?;

        let products_path = base_path.join("products").join(format!("{name}.yml"));
        let contents = fs::read_to_string(&products_path)?;
        let products: products::ProductsFixture = serde_norway::from_str(&contents)?;

        Ok(Self {
            base_path,
            tree,
            products: products.products,
        })
    }

    /// The validated category tree.
    #[must_use]
    pub fn tree(&self) -> &CategoryTree {
        &self.tree
    }

    /// The product list, in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Directory the set was loaded from.
    #[must_use]
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }
}
