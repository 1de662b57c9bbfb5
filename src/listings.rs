//! Listings

use serde::Deserialize;

/// A marketplace listing descriptor.
///
/// The shape shared by catalog entries, cart lines and liked items. Every
/// field is display data and opaque to the collections that hold it; only
/// `id` carries meaning as the identity key for deduplication.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Listing {
    /// Stable identifier, unique per distinct product
    pub id: String,

    /// Display title
    pub title: String,

    /// Display price, currency-prefixed and possibly comma-grouped
    /// (e.g. `"Rs 1,299"`). Stored verbatim and parsed on read only.
    pub price: String,

    /// Image reference for the listing card
    pub image: String,

    /// Seller location
    pub location: String,

    /// Listing kind (e.g. `"featured"`)
    pub kind: Option<String>,

    /// Posted date, preformatted for display
    pub posted: Option<String>,

    /// Category the listing is browsed under
    pub category: Option<String>,
}

impl Listing {
    /// Create a listing with the required display fields and no optional metadata.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        price: impl Into<String>,
        image: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            price: price.into(),
            image: image.into(),
            location: location.into(),
            kind: None,
            posted: None,
            category: None,
        }
    }
}
