//! Listing rendering
//!
//! Renders a filtered product listing as a terminal table. Price, stock and
//! rating are pass-through fields: they are formatted here, never
//! interpreted.

use tabled::{
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};

use crate::products::Product;

/// Render products as a table with name, price, stock and rating columns.
#[must_use]
pub fn render_listing(products: &[&Product]) -> String {
    let mut builder = Builder::default();

    builder.push_record(["Product", "Price", "Stock", "Rating"]);

    for product in products {
        builder.push_record([
            product.name.clone(),
            product
                .price
                .map_or_else(|| "-".to_string(), |price| format!("{price:.2}")),
            product
                .stock
                .map_or_else(|| "-".to_string(), |stock| stock.to_string()),
            product
                .rating
                .map_or_else(|| "-".to_string(), |rating| rating.to_string()),
        ]);
    }

    let mut table = builder.build();

    table.with(Style::rounded());
    table.modify(Columns::new(1..), Alignment::right());

    table.to_string()
}
