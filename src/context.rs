//! Storefront Context
//!
//! Provider-scoped wiring for the storefront. One context is constructed at
//! application start, owns the catalog and the cart store, and is passed by
//! reference to consumers; tests construct isolated instances the same way.
//! Store access that needs to outlive a call site goes through a weak
//! [`StoreHandle`], which fails loudly once the provider is gone.

use std::{
    cell::RefCell,
    rc::{Rc, Weak},
};

use thiserror::Error;

use crate::{catalog::Catalog, store::CartStore};

/// Lifecycle errors for provider-scoped store access.
#[derive(Debug, Error)]
pub enum ContextError {
    /// The owning context has been dropped
    #[error("Store accessed outside its provider scope")]
    OutsideProvider,
}

/// Provider-scoped owner of the catalog and the cart store.
#[derive(Debug)]
pub struct StorefrontContext {
    catalog: Catalog,
    store: Rc<RefCell<CartStore>>,
}

impl StorefrontContext {
    /// Create a context over a loaded catalog, with an empty store.
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            store: Rc::new(RefCell::new(CartStore::new())),
        }
    }

    /// The catalog behind this context.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Run a closure against the store.
    ///
    /// Access is scoped to the closure so a store borrow cannot outlive a
    /// single UI event. The closure must not re-enter the context.
    pub fn store<R>(&self, f: impl FnOnce(&mut CartStore) -> R) -> R {
        f(&mut self.store.borrow_mut())
    }

    /// Create a handle consumers can hold beyond a single call site.
    pub fn handle(&self) -> StoreHandle {
        StoreHandle {
            store: Rc::downgrade(&self.store),
        }
    }
}

/// Weak store accessor handed out to consumers.
///
/// A handle does not keep the store alive. Using one after its context has
/// been dropped is a programming error, reported immediately as
/// [`ContextError::OutsideProvider`].
#[derive(Debug, Clone)]
pub struct StoreHandle {
    store: Weak<RefCell<CartStore>>,
}

impl StoreHandle {
    /// Run a closure against the store.
    ///
    /// # Errors
    ///
    /// Returns [`ContextError::OutsideProvider`] when the owning context no
    /// longer exists.
    pub fn with<R>(&self, f: impl FnOnce(&mut CartStore) -> R) -> Result<R, ContextError> {
        let store = self.store.upgrade().ok_or(ContextError::OutsideProvider)?;
        let result = f(&mut store.borrow_mut());

        Ok(result)
    }
}
