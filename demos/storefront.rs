//! Storefront Demo
//!
//! Loads a catalog set, browses it into a cart, toggles a like, and renders
//! the cart summary.
//!
//! Use `-f` to load a catalog set by name
//! Use `-c` to browse a single category
//! Use `-n` to limit the number of listings added to the cart

use std::io;

use anyhow::Result;
use clap::Parser;
use rusty_money::iso;

use souk::{
    catalog::Catalog, context::StorefrontContext, summary::CartSummary,
    utils::DemoStorefrontArgs,
};

/// Storefront Demo
#[expect(clippy::print_stdout, reason = "Demo program output to user")]
pub fn main() -> Result<()> {
    let args = DemoStorefrontArgs::parse();

    let catalog = Catalog::from_set(&args.fixture)?;

    println!(
        "Loaded {} listings ({})",
        catalog.len(),
        catalog.categories().join(", ")
    );

    let context = StorefrontContext::new(catalog);
    let handle = context.handle();

    let browsed: Vec<_> = if let Some(category) = args.category.as_deref() {
        context.catalog().in_category(category)
    } else {
        context.catalog().listings().collect()
    };

    let count = args.n.unwrap_or(browsed.len()).min(browsed.len());

    for listing in browsed.iter().take(count) {
        handle.with(|store| store.add_to_cart((*listing).clone()))?;
    }

    if let Some(first) = browsed.first() {
        handle.with(|store| store.add_to_cart((*first).clone()))?;

        let liked = handle.with(|store| store.toggle_liked((*first).clone()))?;

        println!("Liked {}: {liked}", first.title);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    context.store(|store| CartSummary::from_store(store, iso::PKR).write_to(&mut out))?;

    drop(context);

    if let Err(error) = handle.with(|store| store.total()) {
        println!("After provider teardown: {error}");
    }

    Ok(())
}
