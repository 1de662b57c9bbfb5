//! Catalog
//!
//! The static listing data behind the storefront's browse screens, loaded
//! from YAML catalog sets. Screens read listings here and pass cloned
//! descriptors into the cart store.

use std::{fs, path::PathBuf};

use rustc_hash::FxHashMap;
use serde::Deserialize;
use slotmap::{SlotMap, new_key_type};
use smallvec::SmallVec;
use thiserror::Error;

use crate::listings::Listing;

new_key_type! {
    /// Listing Key
    pub struct ListingKey;
}

/// Catalog loading and lookup errors.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// IO error reading catalog files
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Two listings share an id
    #[error("Duplicate listing id: {0}")]
    DuplicateListing(String),

    /// Listing not found
    #[error("Listing not found: {0}")]
    ListingNotFound(String),
}

/// On-disk shape of one catalog set file.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    /// Listings in display order
    listings: Vec<Listing>,
}

/// Listing catalog with id lookup and insertion-order iteration.
///
/// At most one listing per id across all loaded sets.
#[derive(Debug)]
pub struct Catalog {
    /// Base path for catalog set files
    base_path: PathBuf,

    /// Listing storage with generated keys
    listings: SlotMap<ListingKey, Listing>,

    /// String id -> `SlotMap` key mapping for lookups
    ids: FxHashMap<String, ListingKey>,

    /// Keys in load order
    order: Vec<ListingKey>,
}

impl Catalog {
    /// Create an empty catalog with the default base path.
    #[must_use]
    pub fn new() -> Self {
        Self::with_base_path("./fixtures")
    }

    /// Create an empty catalog with a custom base path.
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            listings: SlotMap::with_key(),
            ids: FxHashMap::default(),
            order: Vec::new(),
        }
    }

    /// Load listings from a YAML catalog set file.
    ///
    /// Listings are appended in file order, after any sets already loaded.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if a
    /// listing id collides with one already loaded.
    #[tracing::instrument(
        name = "catalog.load_listings",
        skip(self),
        fields(appended = tracing::field::Empty)
    )]
    pub fn load_listings(&mut self, name: &str) -> Result<&mut Self, CatalogError> {
        let file_path = self.base_path.join("catalog").join(format!("{name}.yml"));
        let contents = fs::read_to_string(&file_path)?;
        let file: CatalogFile = serde_norway::from_str(&contents)?;

        let appended = file.listings.len();

        for listing in file.listings {
            if self.ids.contains_key(&listing.id) {
                return Err(CatalogError::DuplicateListing(listing.id));
            }

            let id = listing.id.clone();
            let key = self.listings.insert(listing);

            self.ids.insert(id, key);
            self.order.push(key);
        }

        tracing::Span::current().record("appended", appended);

        Ok(self)
    }

    /// Load a named catalog set in one call.
    ///
    /// # Errors
    ///
    /// Returns an error if the set file cannot be loaded.
    pub fn from_set(name: &str) -> Result<Self, CatalogError> {
        let mut catalog = Self::new();

        catalog.load_listings(name)?;

        Ok(catalog)
    }

    /// Get a listing by its id.
    ///
    /// # Errors
    ///
    /// Returns an error if no listing has that id.
    pub fn listing(&self, id: &str) -> Result<&Listing, CatalogError> {
        let key = self
            .ids
            .get(id)
            .ok_or_else(|| CatalogError::ListingNotFound(id.to_string()))?;

        self.listings
            .get(*key)
            .ok_or_else(|| CatalogError::ListingNotFound(id.to_string()))
    }

    /// All listings in load order.
    pub fn listings(&self) -> impl Iterator<Item = &Listing> {
        self.order.iter().filter_map(|key| self.listings.get(*key))
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> SmallVec<[&str; 8]> {
        let mut categories: SmallVec<[&str; 8]> = SmallVec::new();

        for listing in self.listings() {
            if let Some(category) = listing.category.as_deref()
                && !categories
                    .iter()
                    .any(|known| known.eq_ignore_ascii_case(category))
            {
                categories.push(category);
            }
        }

        categories
    }

    /// Listings in the given category, matched case-insensitively.
    ///
    /// An unknown category yields an empty list.
    pub fn in_category(&self, category: &str) -> Vec<&Listing> {
        self.listings()
            .filter(|listing| {
                listing
                    .category
                    .as_deref()
                    .is_some_and(|own| own.eq_ignore_ascii_case(category))
            })
            .collect()
    }

    /// Listings whose title contains the query, matched case-insensitively.
    ///
    /// An empty query matches everything.
    pub fn search(&self, query: &str) -> Vec<&Listing> {
        let needle = query.to_ascii_lowercase();

        self.listings()
            .filter(|listing| listing.title.to_ascii_lowercase().contains(&needle))
            .collect()
    }

    /// Number of listings.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Check if the catalog has no listings.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}
