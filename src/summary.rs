//! Cart Summary
//!
//! Terminal rendering of the cart: one row per line item with unit price
//! and line total, then a units/total footer. Currency formatting lives
//! here, outside the store. Lines whose display price does not parse render
//! a dash and contribute nothing to the total.

use std::io;

use rust_decimal::Decimal;
use rusty_money::{Money, iso::Currency};
use tabled::{
    builder::Builder,
    grid::config::HorizontalLine,
    settings::{
        Alignment, Color, Style, Theme,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::{
    prices::{parse_display_price, price_minor_units},
    store::CartStore,
};

/// Errors that can occur when rendering a cart summary.
#[derive(Debug, Error)]
pub enum SummaryError {
    /// IO error
    #[error("IO error")]
    Io,
}

/// One display row of the summary table.
#[derive(Debug, Clone)]
struct SummaryRow {
    title: String,
    location: String,
    quantity: u32,
    unit_minor: Option<i64>,
    line_minor: Option<i64>,
}

/// Snapshot of a store's cart prepared for display.
#[derive(Debug, Clone)]
pub struct CartSummary {
    rows: Vec<SummaryRow>,
    total: Decimal,
    unit_count: u64,
    currency: &'static Currency,
}

impl CartSummary {
    /// Snapshot a store's cart for rendering with the given currency.
    #[must_use]
    pub fn from_store(store: &CartStore, currency: &'static Currency) -> Self {
        let rows = store
            .cart_lines()
            .iter()
            .map(|line| {
                let unit = parse_display_price(&line.listing().price);

                SummaryRow {
                    title: line.listing().title.clone(),
                    location: line.listing().location.clone(),
                    quantity: line.quantity(),
                    unit_minor: unit.and_then(price_minor_units),
                    line_minor: unit
                        .and_then(|amount| amount.checked_mul(Decimal::from(line.quantity())))
                        .and_then(price_minor_units),
                }
            })
            .collect();

        Self {
            rows,
            total: store.total(),
            unit_count: store.unit_count(),
            currency,
        }
    }

    /// The snapshot total, the same number the store reports.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.total
    }

    /// Render the summary table and footer.
    ///
    /// # Errors
    ///
    /// Returns a [`SummaryError`] if the sink rejects a write.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), SummaryError> {
        let mut builder = Builder::default();

        builder.push_record(["", "Item", "Location", "Qty", "Unit", "Line Total"]);

        for (index, row) in self.rows.iter().enumerate() {
            builder.push_record([
                (index + 1).to_string(),
                row.title.clone(),
                row.location.clone(),
                row.quantity.to_string(),
                self.money_cell(row.unit_minor),
                self.money_cell(row.line_minor),
            ]);
        }

        let mut table = builder.build();
        let mut theme = Theme::from(Style::modern_rounded());
        let separator = HorizontalLine::new(Some('─'), Some('┼'), Some('├'), Some('┤'));

        theme.remove_horizontal_lines();
        theme.insert_horizontal_line(1, separator);

        table.with(theme);
        table.modify(Rows::first(), Color::BOLD);
        table.modify(Columns::new(3..6), Alignment::right());

        writeln!(out, "\n{table}").map_err(|_err| SummaryError::Io)?;

        let total_minor = price_minor_units(self.total).unwrap_or(0);

        writeln!(out, " Units: {}", self.unit_count).map_err(|_err| SummaryError::Io)?;
        writeln!(
            out,
            " Total: {}",
            Money::from_minor(total_minor, self.currency)
        )
        .map_err(|_err| SummaryError::Io)?;

        Ok(())
    }

    fn money_cell(&self, minor: Option<i64>) -> String {
        minor.map_or_else(
            || "-".to_string(),
            |value| Money::from_minor(value, self.currency).to_string(),
        )
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::iso;
    use testresult::TestResult;

    use super::*;
    use crate::listings::Listing;

    fn store_with(listings: &[(&str, &str)]) -> CartStore {
        let mut store = CartStore::new();

        for (id, price) in listings {
            store.add_to_cart(Listing::new(
                *id,
                format!("Listing {id}"),
                *price,
                "listing.jpg",
                "Karachi",
            ));
        }

        store
    }

    #[test]
    fn write_to_renders_rows_and_total() -> TestResult {
        let mut store = store_with(&[("1", "Rs 1,299"), ("2", "rs 500")]);

        store.add_to_cart(Listing::new(
            "1",
            "ignored",
            "ignored",
            "ignored.jpg",
            "ignored",
        ));

        let summary = CartSummary::from_store(&store, iso::PKR);
        let mut rendered = Vec::new();

        summary.write_to(&mut rendered)?;

        let text = String::from_utf8(rendered)?;

        assert!(text.contains("Listing 1"));
        assert!(text.contains("Listing 2"));
        assert!(text.contains("Units: 3"));
        assert!(text.contains("Total:"));
        assert_eq!(summary.total(), Decimal::from(3098));

        Ok(())
    }

    #[test]
    fn unparsable_price_renders_a_dash_and_contributes_nothing() -> TestResult {
        let store = store_with(&[("s-2", "Contact seller"), ("s-1", "Rs 850")]);
        let summary = CartSummary::from_store(&store, iso::PKR);
        let mut rendered = Vec::new();

        summary.write_to(&mut rendered)?;

        let text = String::from_utf8(rendered)?;

        assert!(text.contains(" - "));
        assert_eq!(summary.total(), Decimal::from(850));

        Ok(())
    }

    #[test]
    fn line_total_too_large_for_decimal_renders_a_dash() -> TestResult {
        let mut store = store_with(&[("big", "Rs 40,000,000,000,000,000,000,000,000,000")]);

        store.add_to_cart(Listing::new(
            "big",
            "ignored",
            "ignored",
            "ignored.jpg",
            "ignored",
        ));

        let summary = CartSummary::from_store(&store, iso::PKR);
        let mut rendered = Vec::new();

        summary.write_to(&mut rendered)?;

        let text = String::from_utf8(rendered)?;

        assert!(text.contains(" - "));
        assert_eq!(summary.total(), Decimal::ZERO);

        Ok(())
    }

    #[test]
    fn empty_cart_renders_header_and_zero_total() -> TestResult {
        let store = CartStore::new();
        let summary = CartSummary::from_store(&store, iso::PKR);
        let mut rendered = Vec::new();

        summary.write_to(&mut rendered)?;

        let text = String::from_utf8(rendered)?;

        assert!(text.contains("Item"));
        assert!(text.contains("Units: 0"));
        assert_eq!(summary.total(), Decimal::ZERO);

        Ok(())
    }
}
