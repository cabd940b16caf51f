//! # Cart Session
//!
//! Owns the session's [`CartStore`] and logs every transition.
//!
//! ## Flow
//! ```text
//! command ──► CartSession::dispatch(action)
//!                  │
//!                  ▼
//!             CartStore::dispatch ──► reduce ──► subscribers
//!                                                  │
//!                                                  ▼
//!                                   debug!("Cart updated", lines, items, total)
//! ```
//!
//! The session is single-threaded, so unlike a shared `Arc<Mutex<_>>` there
//! is no locking: the shell owns the session and applies actions in order.

use storefront_core::{CartAction, CartState, CartStore, CartTotals, SubscriptionId};
use tracing::debug;

/// The session's cart.
#[derive(Debug)]
pub struct CartSession {
    store: CartStore,
}

impl Default for CartSession {
    fn default() -> Self {
        Self::new()
    }
}

impl CartSession {
    /// Creates an empty cart with the logging subscriber attached.
    pub fn new() -> Self {
        let mut store = CartStore::new();
        store.subscribe(|cart: &CartState| {
            let totals = CartTotals::from(cart);
            debug!(
                lines = totals.line_count,
                items = totals.item_count,
                total = %totals.total,
                "Cart updated"
            );
        });

        CartSession { store }
    }

    /// Current cart.
    pub fn cart(&self) -> &CartState {
        self.store.state()
    }

    /// Applies one cart action.
    pub fn dispatch(&mut self, action: CartAction) -> &CartState {
        debug!(action = action.name(), "Dispatching cart action");
        self.store.dispatch(action)
    }

    /// Registers an extra listener (e.g. a badge renderer).
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&CartState) + 'static,
    {
        self.store.subscribe(listener)
    }

    /// Removes a listener added with [`CartSession::subscribe`].
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.store.unsubscribe(id)
    }

    /// Cart badge: total quantity.
    pub fn badge(&self) -> u64 {
        CartTotals::from(self.cart()).item_count
    }
}
