//! Browse a fixture catalog: filter a product listing by category subtree and
//! search text, and show the sidebar expansion state for the selection.

use clap::Parser;

use canopy::{
    filter::ListingFilter,
    fixtures::Fixture,
    listing::render_listing,
    selection::CategorySelection,
    sidebar::{SidebarNode, sidebar_tree},
    utils::DemoCatalogArgs,
};

fn main() -> anyhow::Result<()> {
    let args = DemoCatalogArgs::parse();

    let fixture = Fixture::from_set(&args.fixture)?;

    let selection = CategorySelection::from_query_param(&args.category);
    let filter = ListingFilter::new(selection.clone(), args.search);

    let mut listing = filter.apply(fixture.products(), fixture.tree());

    // Price sorting is a caller-side comparator, separate from filtering.
    if args.sort_by_price {
        listing.sort_by_key(|product| product.price);
    }

    println!("category={}", selection.as_query_param());
    println!();

    print_sidebar(&sidebar_tree(fixture.tree(), &selection), 0);

    println!();
    println!("{}", render_listing(&listing));

    Ok(())
}

fn print_sidebar(nodes: &[SidebarNode<'_>], depth: usize) {
    for node in nodes {
        let marker = if node.is_selected {
            '>'
        } else if node.is_expanded {
            'v'
        } else {
            '-'
        };

        println!("{}{marker} {}", "  ".repeat(depth), node.category.name);

        if node.is_expanded {
            print_sidebar(&node.children, depth + 1);
        }
    }
}
