//! Souk prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{AddOutcome, Cart, LineItem, QuantityOutcome},
    catalog::{Catalog, CatalogError, ListingKey},
    context::{ContextError, StoreHandle, StorefrontContext},
    likes::LikedItems,
    listings::Listing,
    observer::{NoopObserver, StoreObserver},
    prices::{parse_display_price, price_minor_units},
    store::CartStore,
    summary::{CartSummary, SummaryError},
};
