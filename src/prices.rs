//! Prices
//!
//! Listings carry their price as a display string (`"Rs 1,299"`). Totals
//! parse those strings leniently: the currency prefix and digit grouping are
//! stripped and anything that still fails to parse contributes nothing, so a
//! single malformed listing can never poison a whole cart total.

use rust_decimal::{Decimal, prelude::ToPrimitive};

/// Characters stripped before parsing: the rupee prefix letters in either
/// case, digit grouping commas, and whitespace.
fn is_display_noise(c: char) -> bool {
    matches!(c, 'r' | 'R' | 's' | 'S' | ',') || c.is_whitespace()
}

/// Parse a display price string into a decimal amount.
///
/// Strips `r`, `s`, `R`, `S`, commas and whitespace, then parses the
/// remainder as a decimal number. Returns `None` when nothing parsable
/// remains; callers computing totals map that to zero.
pub fn parse_display_price(raw: &str) -> Option<Decimal> {
    let cleaned: String = raw.chars().filter(|c| !is_display_noise(*c)).collect();

    cleaned.parse::<Decimal>().ok()
}

/// Convert a decimal amount to minor units (×100, rounded).
///
/// Returns `None` when the amount does not fit the minor-unit range.
pub fn price_minor_units(amount: Decimal) -> Option<i64> {
    amount
        .checked_mul(Decimal::new(100, 0))
        .and_then(|value| value.round_dp(0).to_i64())
}
