//! Souk
//!
//! Souk is the state core of a mobile marketplace storefront: an in-memory,
//! observable cart and liked-items store, the listing catalog behind the
//! browse screens, and terminal rendering for cart summaries.

pub mod cart;
pub mod catalog;
pub mod context;
pub mod likes;
pub mod listings;
pub mod observer;
pub mod prelude;
pub mod prices;
pub mod store;
pub mod summary;
pub mod utils;
