//! Product fixture files

use serde::Deserialize;

use crate::products::Product;

/// Top-level shape of a product fixture file.
#[derive(Debug, Deserialize)]
pub struct ProductsFixture {
    /// Products, in catalog order
    pub products: Vec<Product>,
}
