//! Liked Items

use crate::listings::Listing;

/// Ordered, id-keyed set of liked listings.
///
/// Presence in the collection is itself the "liked" signal; there is no
/// separate flag. At most one listing per id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LikedItems {
    listings: Vec<Listing>,
}

impl LikedItems {
    /// Create an empty liked collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle a listing's liked state.
    ///
    /// Returns `true` when the listing is liked after the call and `false`
    /// when the call un-liked it. Toggling twice with the same id restores
    /// the prior state.
    pub fn toggle(&mut self, listing: Listing) -> bool {
        if self.remove(&listing.id).is_some() {
            return false;
        }

        self.listings.push(listing);

        true
    }

    /// Check whether a listing id is currently liked.
    pub fn contains(&self, id: &str) -> bool {
        self.listings.iter().any(|listing| listing.id == id)
    }

    /// Remove a listing by id, returning it if it was present.
    pub fn remove(&mut self, id: &str) -> Option<Listing> {
        let index = self.listings.iter().position(|listing| listing.id == id)?;

        Some(self.listings.remove(index))
    }

    /// All liked listings in insertion order.
    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    /// Number of liked listings.
    pub fn len(&self) -> usize {
        self.listings.len()
    }

    /// Check if nothing is liked.
    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(id: &str) -> Listing {
        Listing::new(id, "Parrot Pair", "Rs 4,000", "parrots.jpg", "Sialkot")
    }

    #[test]
    fn toggle_likes_then_unlikes() {
        let mut liked = LikedItems::new();

        assert!(liked.toggle(listing("s-2")));
        assert!(liked.contains("s-2"));

        assert!(!liked.toggle(listing("s-2")));
        assert!(!liked.contains("s-2"));
        assert!(liked.is_empty());
    }

    #[test]
    fn double_toggle_restores_prior_state() {
        let mut liked = LikedItems::new();

        liked.toggle(listing("a"));

        let before = liked.clone();

        liked.toggle(listing("b"));
        liked.toggle(listing("b"));

        assert_eq!(liked, before);
    }

    #[test]
    fn toggle_dedupes_by_id_only() {
        let mut liked = LikedItems::new();

        liked.toggle(listing("s-2"));

        let relisted = Listing::new("s-2", "Different Title", "Rs 1", "x.jpg", "Quetta");

        assert!(!liked.toggle(relisted));
        assert!(liked.is_empty());
    }

    #[test]
    fn remove_ignores_absent_ids() {
        let mut liked = LikedItems::new();

        liked.toggle(listing("s-2"));

        assert!(liked.remove("missing-id").is_none());
        assert_eq!(liked.len(), 1);

        assert!(liked.remove("s-2").is_some());
        assert!(liked.is_empty());
    }

    #[test]
    fn listings_keep_insertion_order() {
        let mut liked = LikedItems::new();

        liked.toggle(listing("a"));
        liked.toggle(listing("b"));
        liked.toggle(listing("c"));

        let ids: Vec<&str> = liked.listings().iter().map(|l| l.id.as_str()).collect();

        assert_eq!(ids, ["a", "b", "c"]);
    }
}
