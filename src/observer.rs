//! Store Observer

use crate::listings::Listing;

/// Observer trait for store change notifications.
///
/// Views subscribe to the store and re-render from these callbacks instead
/// of polling the collections after every tap. Callbacks fire after the
/// mutation has been applied, and only when state actually changed; silent
/// no-ops (removing an absent id, clearing an already-empty cart) fire
/// nothing.
///
/// Every method has an empty default body, so observers implement only the
/// events they render. The store is single-threaded, so no `Send`/`Sync`
/// bounds apply.
pub trait StoreObserver {
    /// Called when a new line enters the cart with quantity 1.
    fn on_line_added(&mut self, _listing: &Listing) {}

    /// Called when an existing line's quantity changes.
    fn on_quantity_changed(&mut self, _id: &str, _quantity: u32) {}

    /// Called when a line leaves the cart.
    fn on_line_removed(&mut self, _id: &str) {}

    /// Called when the cart is emptied, with the number of lines dropped.
    fn on_cart_cleared(&mut self, _lines: usize) {}

    /// Called when a listing is liked.
    fn on_listing_liked(&mut self, _listing: &Listing) {}

    /// Called when a listing is un-liked.
    fn on_listing_unliked(&mut self, _id: &str) {}
}

/// Observer that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl StoreObserver for NoopObserver {}
