//! Cart Store
//!
//! The storefront's state container: cart lines and liked listings behind a
//! single mutation surface, with observer notification on every change.

use std::fmt;

use rust_decimal::Decimal;
use tracing::debug;

use crate::{
    cart::{AddOutcome, Cart, LineItem, QuantityOutcome},
    likes::LikedItems,
    listings::Listing,
    observer::StoreObserver,
};

/// In-memory, observable store of cart lines and liked listings.
///
/// Every operation is total: all inputs are accepted, malformed prices
/// degrade to zero in totals, and absent ids make mutations silent no-ops.
/// Both collections start empty and live for the process; there is no
/// persistence. Observers are notified after a mutation is applied, and
/// only when state actually changed.
#[derive(Default)]
pub struct CartStore {
    cart: Cart,
    liked: LikedItems,
    observers: Vec<Box<dyn StoreObserver>>,
}

impl fmt::Debug for CartStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartStore")
            .field("cart", &self.cart)
            .field("liked", &self.liked)
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}

impl CartStore {
    /// Create an empty store with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an observer for change notifications.
    ///
    /// Observers live as long as the store; there is no unsubscribe.
    pub fn subscribe(&mut self, observer: Box<dyn StoreObserver>) {
        self.observers.push(observer);
    }

    /// Add a listing to the cart.
    ///
    /// A repeat id increments the existing line's quantity and keeps its
    /// first-seen display fields; a new id appends a line with quantity 1.
    pub fn add_to_cart(&mut self, listing: Listing) {
        let id = listing.id.clone();

        match self.cart.add(listing) {
            AddOutcome::Added => {
                debug!(listing_id = %id, "added cart line");

                if let Some(line) = self.cart.get(&id) {
                    for observer in &mut self.observers {
                        observer.on_line_added(line.listing());
                    }
                }
            }
            AddOutcome::Incremented(quantity) => {
                debug!(listing_id = %id, quantity, "incremented cart line");

                for observer in &mut self.observers {
                    observer.on_quantity_changed(&id, quantity);
                }
            }
        }
    }

    /// Remove the line with the given id. Absent ids are silent no-ops.
    pub fn remove_from_cart(&mut self, id: &str) {
        if self.cart.remove(id).is_some() {
            debug!(listing_id = %id, "removed cart line");

            for observer in &mut self.observers {
                observer.on_line_removed(id);
            }
        }
    }

    /// Adjust a line's quantity by a signed delta.
    ///
    /// A resulting quantity of zero or below removes the line; quantities
    /// never persist at zero. Absent ids are silent no-ops.
    pub fn update_quantity(&mut self, id: &str, delta: i64) {
        match self.cart.adjust_quantity(id, delta) {
            QuantityOutcome::Absent => {}
            QuantityOutcome::Updated(quantity) => {
                debug!(listing_id = %id, quantity, delta, "updated cart quantity");

                for observer in &mut self.observers {
                    observer.on_quantity_changed(id, quantity);
                }
            }
            QuantityOutcome::Removed => {
                debug!(listing_id = %id, delta, "removed cart line at zero quantity");

                for observer in &mut self.observers {
                    observer.on_line_removed(id);
                }
            }
        }
    }

    /// Empty the cart. Liked items are unaffected.
    pub fn clear_cart(&mut self) {
        let dropped = self.cart.clear();

        if dropped > 0 {
            debug!(lines = dropped, "cleared cart");

            for observer in &mut self.observers {
                observer.on_cart_cleared(dropped);
            }
        }
    }

    /// Sum of `price * quantity` across all cart lines.
    ///
    /// Unparsable display prices contribute zero and amounts beyond
    /// `Decimal`'s range degrade to zero; the total is defined for every
    /// cart state. Currency formatting is a display concern and lives in
    /// the summary renderer.
    pub fn total(&self) -> Decimal {
        self.cart.total()
    }

    /// Toggle a listing's liked state.
    ///
    /// Returns `true` when the listing is liked after the call. Toggling
    /// twice with the same id restores the prior state.
    pub fn toggle_liked(&mut self, listing: Listing) -> bool {
        let id = listing.id.clone();

        if self.liked.toggle(listing) {
            debug!(listing_id = %id, "liked listing");

            if let Some(liked) = self.liked.listings().last() {
                for observer in &mut self.observers {
                    observer.on_listing_liked(liked);
                }
            }

            true
        } else {
            debug!(listing_id = %id, "unliked listing");

            for observer in &mut self.observers {
                observer.on_listing_unliked(&id);
            }

            false
        }
    }

    /// Check whether a listing id is currently liked. Pure query.
    pub fn is_liked(&self, id: &str) -> bool {
        self.liked.contains(id)
    }

    /// Remove a listing from the liked collection. Absent ids are silent
    /// no-ops.
    pub fn remove_from_liked(&mut self, id: &str) {
        if self.liked.remove(id).is_some() {
            debug!(listing_id = %id, "removed liked listing");

            for observer in &mut self.observers {
                observer.on_listing_unliked(id);
            }
        }
    }

    /// Cart lines in insertion order.
    pub fn cart_lines(&self) -> &[LineItem] {
        self.cart.lines()
    }

    /// Liked listings in insertion order.
    pub fn liked_items(&self) -> &[Listing] {
        self.liked.listings()
    }

    /// Number of distinct cart lines.
    pub fn line_count(&self) -> usize {
        self.cart.len()
    }

    /// Total units across all cart lines, for badge rendering.
    pub fn unit_count(&self) -> u64 {
        self.cart.unit_count()
    }

    /// Check if the cart is empty.
    pub fn is_cart_empty(&self) -> bool {
        self.cart.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::*;

    fn listing(id: &str, price: &str) -> Listing {
        Listing::new(id, "Haier Window AC", price, "ac.jpg", "Multan")
    }

    #[derive(Default)]
    struct RecordingObserver {
        events: Rc<RefCell<Vec<String>>>,
    }

    impl RecordingObserver {
        fn subscribe(store: &mut CartStore) -> Rc<RefCell<Vec<String>>> {
            let events = Rc::new(RefCell::new(Vec::new()));

            store.subscribe(Box::new(Self {
                events: Rc::clone(&events),
            }));

            events
        }
    }

    impl StoreObserver for RecordingObserver {
        fn on_line_added(&mut self, listing: &Listing) {
            self.events
                .borrow_mut()
                .push(format!("added {}", listing.id));
        }

        fn on_quantity_changed(&mut self, id: &str, quantity: u32) {
            self.events
                .borrow_mut()
                .push(format!("quantity {id} {quantity}"));
        }

        fn on_line_removed(&mut self, id: &str) {
            self.events.borrow_mut().push(format!("removed {id}"));
        }

        fn on_cart_cleared(&mut self, lines: usize) {
            self.events.borrow_mut().push(format!("cleared {lines}"));
        }

        fn on_listing_liked(&mut self, listing: &Listing) {
            self.events
                .borrow_mut()
                .push(format!("liked {}", listing.id));
        }

        fn on_listing_unliked(&mut self, id: &str) {
            self.events.borrow_mut().push(format!("unliked {id}"));
        }
    }

    #[test]
    fn add_to_cart_notifies_added_then_quantity_changes() {
        let mut store = CartStore::new();
        let events = RecordingObserver::subscribe(&mut store);

        store.add_to_cart(listing("e-303", "Rs 31,500"));
        store.add_to_cart(listing("e-303", "Rs 31,500"));

        assert_eq!(
            *events.borrow(),
            ["added e-303", "quantity e-303 2"]
        );
    }

    #[test]
    fn silent_no_ops_fire_no_events() {
        let mut store = CartStore::new();
        let events = RecordingObserver::subscribe(&mut store);

        store.remove_from_cart("missing-id");
        store.update_quantity("missing-id", 1);
        store.remove_from_liked("missing-id");
        store.clear_cart();

        assert!(events.borrow().is_empty());
    }

    #[test]
    fn update_quantity_to_zero_notifies_removal() {
        let mut store = CartStore::new();
        let events = RecordingObserver::subscribe(&mut store);

        store.add_to_cart(listing("e-303", "Rs 31,500"));
        store.update_quantity("e-303", -1);

        assert_eq!(*events.borrow(), ["added e-303", "removed e-303"]);
        assert!(store.is_cart_empty());
    }

    #[test]
    fn clear_cart_reports_dropped_lines_and_spares_likes() {
        let mut store = CartStore::new();
        let events = RecordingObserver::subscribe(&mut store);

        store.add_to_cart(listing("a", "Rs 100"));
        store.add_to_cart(listing("b", "Rs 200"));
        store.toggle_liked(listing("a", "Rs 100"));
        store.clear_cart();

        assert!(store.is_cart_empty());
        assert!(store.is_liked("a"));
        assert_eq!(
            *events.borrow(),
            ["added a", "added b", "liked a", "cleared 2"]
        );
    }

    #[test]
    fn toggle_liked_notifies_like_and_unlike() {
        let mut store = CartStore::new();
        let events = RecordingObserver::subscribe(&mut store);

        assert!(store.toggle_liked(listing("s-2", "Rs 4,000")));
        assert!(!store.toggle_liked(listing("s-2", "Rs 4,000")));

        assert_eq!(*events.borrow(), ["liked s-2", "unliked s-2"]);
        assert!(!store.is_liked("s-2"));
    }

    #[test]
    fn remove_from_liked_notifies_once() {
        let mut store = CartStore::new();
        let events = RecordingObserver::subscribe(&mut store);

        store.toggle_liked(listing("s-2", "Rs 4,000"));
        store.remove_from_liked("s-2");
        store.remove_from_liked("s-2");

        assert_eq!(*events.borrow(), ["liked s-2", "unliked s-2"]);
    }

    #[test]
    fn counters_track_lines_and_units() {
        let mut store = CartStore::new();

        store.add_to_cart(listing("a", "Rs 100"));
        store.add_to_cart(listing("a", "Rs 100"));
        store.add_to_cart(listing("b", "Rs 200"));

        assert_eq!(store.line_count(), 2);
        assert_eq!(store.unit_count(), 3);
        assert_eq!(store.cart_lines().len(), 2);
    }

    #[test]
    fn debug_output_hides_observer_contents() {
        let mut store = CartStore::new();

        store.subscribe(Box::new(crate::observer::NoopObserver));

        let rendered = format!("{store:?}");

        assert!(rendered.contains("CartStore"));
        assert!(rendered.contains("observers: 1"));
    }
}
