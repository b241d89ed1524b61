//! Products

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, de};

use crate::categories::CategoryId;

/// Opaque product identifier.
///
/// The catalog API emits both numeric and string ids; both normalize to the
/// string form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Create a new product id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl<'de> Deserialize<'de> for ProductId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct IdVisitor;

        impl de::Visitor<'_> for IdVisitor {
            type Value = ProductId;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a string or integer product id")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                Ok(ProductId(v.to_string()))
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
                Ok(ProductId(v))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
                Ok(ProductId(v.to_string()))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
                Ok(ProductId(v.to_string()))
            }
        }

        deserializer.deserialize_any(IdVisitor)
    }
}

/// Product as delivered by the catalog API.
///
/// `price`, `image`, `stock` and `rating` are pass-through fields for the
/// rendering collaborator; the filter never interprets them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Opaque unique identifier
    pub id: ProductId,

    /// Display name, matched by free-text search
    pub name: String,

    /// Longer description, also matched by free-text search
    #[serde(default)]
    pub description: String,

    /// Owning category; a product with no category never matches a
    /// non-`All` selection
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<CategoryId>,

    /// Only an explicit `false` excludes the product from listings
    #[serde(default = "default_active")]
    pub is_active: bool,

    /// Unit price
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,

    /// Image reference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// Units in stock
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock: Option<u32>,

    /// Average customer rating
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<Decimal>,
}

fn default_active() -> bool {
    true
}
