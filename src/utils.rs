//! Utils

use clap::Parser;

/// Arguments for the catalog demos
#[derive(Debug, Parser)]
pub struct DemoCatalogArgs {
    /// Fixture set to load
    #[clap(short, long, default_value = "power-tools")]
    pub fixture: String,

    /// Category selection: a slug, an id, or the `All` sentinel
    #[clap(short, long, default_value = "All")]
    pub category: String,

    /// Free-text search query
    #[clap(short, long, default_value = "")]
    pub search: String,

    /// Sort the listing by price, cheapest first
    #[clap(long)]
    pub sort_by_price: bool,
}
