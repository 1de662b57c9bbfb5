//! Cart

use rust_decimal::Decimal;

use crate::{listings::Listing, prices::parse_display_price};

/// One distinct product held in the cart, with its accumulated quantity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItem {
    listing: Listing,
    quantity: u32,
}

impl LineItem {
    fn new(listing: Listing) -> Self {
        Self {
            listing,
            quantity: 1,
        }
    }

    /// The descriptor captured when the line was first added.
    pub fn listing(&self) -> &Listing {
        &self.listing
    }

    /// Identity key of the line.
    pub fn id(&self) -> &str {
        &self.listing.id
    }

    /// Current quantity, always at least 1.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// This line's contribution to the cart total.
    ///
    /// An unparsable display price contributes zero, as does a line total
    /// too large for `Decimal`.
    pub fn line_total(&self) -> Decimal {
        parse_display_price(&self.listing.price)
            .and_then(|price| price.checked_mul(Decimal::from(self.quantity)))
            .unwrap_or_default()
    }
}

/// Outcome of adding a listing to the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// A new line was appended with quantity 1.
    Added,
    /// An existing line's quantity was incremented to the given value.
    Incremented(u32),
}

/// Outcome of adjusting a line's quantity by a signed delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityOutcome {
    /// No line with that id exists; nothing changed.
    Absent,
    /// Quantity updated in place to the given value.
    Updated(u32),
    /// The adjustment reached zero or below and the line was removed.
    Removed,
}

/// Ordered, id-keyed collection of cart line items.
///
/// At most one line per id; insertion order is preserved for display and
/// carries no meaning for totals.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    lines: Vec<LineItem>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a listing to the cart.
    ///
    /// A repeat id increments the existing line's quantity by one and keeps
    /// the line's first-seen display fields; the passed descriptor is
    /// dropped. A new id appends a line with quantity 1.
    pub fn add(&mut self, listing: Listing) -> AddOutcome {
        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|line| line.listing.id == listing.id)
        {
            line.quantity = line.quantity.saturating_add(1);

            return AddOutcome::Incremented(line.quantity);
        }

        self.lines.push(LineItem::new(listing));

        AddOutcome::Added
    }

    /// Remove the line with the given id, returning it if it existed.
    pub fn remove(&mut self, id: &str) -> Option<LineItem> {
        let index = self.lines.iter().position(|line| line.listing.id == id)?;

        Some(self.lines.remove(index))
    }

    /// Adjust a line's quantity by a signed delta.
    ///
    /// A resulting quantity of zero or below removes the line entirely; a
    /// line never persists at quantity zero. Unknown ids leave the cart
    /// untouched.
    pub fn adjust_quantity(&mut self, id: &str, delta: i64) -> QuantityOutcome {
        let Some(index) = self.lines.iter().position(|line| line.listing.id == id) else {
            return QuantityOutcome::Absent;
        };

        let Some(line) = self.lines.get_mut(index) else {
            return QuantityOutcome::Absent;
        };

        let updated = i64::from(line.quantity).saturating_add(delta);

        if updated <= 0 {
            self.lines.remove(index);

            return QuantityOutcome::Removed;
        }

        line.quantity = u32::try_from(updated).unwrap_or(u32::MAX);

        QuantityOutcome::Updated(line.quantity)
    }

    /// Remove every line, returning how many were dropped.
    pub fn clear(&mut self) -> usize {
        let dropped = self.lines.len();

        self.lines.clear();

        dropped
    }

    /// Sum of `price * quantity` across all lines.
    ///
    /// Unparsable display prices contribute zero rather than aborting the
    /// computation, and a sum beyond `Decimal`'s range degrades to zero, so
    /// the total is defined for every cart state.
    pub fn total(&self) -> Decimal {
        self.lines
            .iter()
            .map(LineItem::line_total)
            .try_fold(Decimal::ZERO, Decimal::checked_add)
            .unwrap_or_default()
    }

    /// Line with the given id, if present.
    pub fn get(&self, id: &str) -> Option<&LineItem> {
        self.lines.iter().find(|line| line.listing.id == id)
    }

    /// All lines in insertion order.
    pub fn lines(&self) -> &[LineItem] {
        &self.lines
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total units across all lines (sum of quantities).
    pub fn unit_count(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }
}
