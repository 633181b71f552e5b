//! Thread-safe cart handle.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use storefront_catalog::Product;
use storefront_core::ProductId;

use crate::cart::{Cart, CartLine};

/// Cart shared across threads.
///
/// Each add/remove runs entirely under a single lock, so concurrent callers
/// observe the same sequential semantics as a plain [`Cart`].
#[derive(Debug, Clone, Default)]
pub struct SharedCart {
    inner: Arc<Mutex<Cart>>,
}

impl SharedCart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cart(cart: Cart) -> Self {
        Self {
            inner: Arc::new(Mutex::new(cart)),
        }
    }

    // A panic mid-operation cannot leave a half-applied event behind, so a
    // poisoned lock still guards a consistent cart.
    fn lock(&self) -> MutexGuard<'_, Cart> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn add_item(&self, product: Product) {
        self.lock().add_item(product);
    }

    pub fn remove_item(&self, product_id: ProductId) -> bool {
        self.lock().remove_item(product_id)
    }

    pub fn total_item_count(&self) -> u64 {
        self.lock().total_item_count()
    }

    pub fn total_price(&self) -> f64 {
        self.lock().total_price()
    }

    /// Defensive copy of the current lines.
    pub fn lines(&self) -> Vec<CartLine> {
        self.lock().lines().to_vec()
    }

    /// Copy of the whole cart at this instant.
    pub fn snapshot(&self) -> Cart {
        self.lock().clone()
    }
}
