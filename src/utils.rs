//! Utils

use clap::Parser;

/// Arguments for the storefront demo
#[derive(Debug, Parser)]
pub struct DemoStorefrontArgs {
    /// Number of listings to add to the cart
    #[clap(short, long)]
    pub n: Option<usize>,

    /// Catalog set to load listings from
    #[clap(short, long, default_value = "classifieds")]
    pub fixture: String,

    /// Category to browse (defaults to the whole catalog)
    #[clap(short, long)]
    pub category: Option<String>,
}
