//! # Cart
//!
//! The authoritative cart state and its five transitions.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart State Operations                                │
//! │                                                                         │
//! │  User Action              CartAction              Cart State Change     │
//! │  ───────────              ──────────              ─────────────────     │
//! │                                                                         │
//! │  Add to Cart ────────────► Add(product) ────────► qty += 1 or push     │
//! │                                                                         │
//! │  Tap "+" ────────────────► Increase(id) ────────► qty += 1             │
//! │                                                                         │
//! │  Tap "-" ────────────────► Decrease(id) ────────► qty -= 1 (floor 1)   │
//! │                                                                         │
//! │  Tap Remove ─────────────► Remove(id) ──────────► line dropped         │
//! │                                                                         │
//! │  Buy / Clear ────────────► Clear ───────────────► items = []           │
//! │                                                                         │
//! │  NOTE: every transition is total. An id that is not in the cart        │
//! │        leaves the state unchanged.                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Two Ways In
//! - [`CartState`] methods are pure transitions: they consume the current
//!   state and return the next one.
//! - [`CartStore`] owns one `CartState`, applies [`CartAction`]s in dispatch
//!   order and tells its subscribers about every new state.

use serde::Serialize;
use std::fmt;
use ts_rs::TS;

use crate::money::Money;
use crate::types::{Product, ProductId};

// =============================================================================
// Line Item
// =============================================================================

/// One product/quantity pairing in the cart.
///
/// ## Design Notes
/// - `product` is a snapshot taken when the line was created; adding the
///   same id again only bumps the quantity and never replaces the snapshot.
/// - `quantity` is at least 1 for as long as the line exists.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct CartLineItem {
    product: Product,
    quantity: u32,
}

impl CartLineItem {
    fn new(product: Product) -> Self {
        CartLineItem {
            product,
            quantity: 1,
        }
    }

    /// The product snapshot stored with this line.
    pub fn product(&self) -> &Product {
        &self.product
    }

    /// Units of the product in the cart (always >= 1).
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Unit price × quantity.
    pub fn line_total(&self) -> Money {
        self.product.price.multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Cart State
// =============================================================================

/// The shopping cart.
///
/// ## Invariants
/// - At most one line per distinct `product.id`
/// - Lines keep the order in which their product was first added
/// - Every line has `quantity >= 1`
///
/// Fields are private; the only way to change a cart is through the
/// transitions below.
#[derive(Debug, Clone, Default, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct CartState {
    items: Vec<CartLineItem>,
}

impl CartState {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Line items in insertion order.
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Adds one unit of `product`.
    ///
    /// ## Behavior
    /// - Product id already in cart: quantity + 1, stored snapshot kept
    /// - Otherwise: new line `{ product, quantity: 1 }` appended at the end
    pub fn add_to_cart(mut self, product: Product) -> Self {
        match self.line_mut(&product.id) {
            Some(line) => line.quantity = line.quantity.saturating_add(1),
            None => self.items.push(CartLineItem::new(product)),
        }
        self
    }

    /// Drops the line for `product_id`, if any.
    pub fn remove_from_cart(mut self, product_id: &ProductId) -> Self {
        self.items.retain(|line| &line.product.id != product_id);
        self
    }

    /// Adds one unit to an existing line. No upper bound.
    pub fn increase_quantity(mut self, product_id: &ProductId) -> Self {
        if let Some(line) = self.line_mut(product_id) {
            line.quantity = line.quantity.saturating_add(1);
        }
        self
    }

    /// Removes one unit from an existing line, never going below 1.
    ///
    /// A line at quantity 1 is left alone: removing it takes an explicit
    /// [`CartState::remove_from_cart`].
    pub fn decrease_quantity(mut self, product_id: &ProductId) -> Self {
        if let Some(line) = self.line_mut(product_id) {
            if line.quantity > 1 {
                line.quantity -= 1;
            }
        }
        self
    }

    /// Empties the cart unconditionally.
    pub fn clear_cart(mut self) -> Self {
        self.items.clear();
        self
    }

    /// Applies one action and returns the next state.
    pub fn reduce(self, action: CartAction) -> Self {
        match action {
            CartAction::Add(product) => self.add_to_cart(product),
            CartAction::Remove(id) => self.remove_from_cart(&id),
            CartAction::Increase(id) => self.increase_quantity(&id),
            CartAction::Decrease(id) => self.decrease_quantity(&id),
            CartAction::Clear => self.clear_cart(),
        }
    }

    fn line_mut(&mut self, product_id: &ProductId) -> Option<&mut CartLineItem> {
        self.items
            .iter_mut()
            .find(|line| &line.product.id == product_id)
    }
}

// =============================================================================
// Actions
// =============================================================================

/// The five cart operations as data, for dispatch through a [`CartStore`].
#[derive(Debug, Clone, PartialEq)]
pub enum CartAction {
    Add(Product),
    Remove(ProductId),
    Increase(ProductId),
    Decrease(ProductId),
    Clear,
}

impl CartAction {
    /// Short name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            CartAction::Add(_) => "add_to_cart",
            CartAction::Remove(_) => "remove_from_cart",
            CartAction::Increase(_) => "increase_quantity",
            CartAction::Decrease(_) => "decrease_quantity",
            CartAction::Clear => "clear_cart",
        }
    }
}

// =============================================================================
// Store
// =============================================================================

/// Handle returned by [`CartStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&CartState)>;

/// Single owner of the session's cart.
///
/// ## Dispatch Cycle
/// ```text
/// dispatch(action)
///      │
///      ▼
/// state = state.reduce(action)      (synchronous, never fails)
///      │
///      ▼
/// every subscriber(&state)          (in subscription order)
/// ```
///
/// Listeners run after every dispatch, including ones that turned out to be
/// no-ops. The store is not `Send`: one session owns it and actions are
/// applied strictly in the order they are dispatched.
#[derive(Default)]
pub struct CartStore {
    state: CartState,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl CartStore {
    /// Creates a store holding an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current cart (read only).
    pub fn state(&self) -> &CartState {
        &self.state
    }

    /// Applies `action`, notifies subscribers and returns the new state.
    pub fn dispatch(&mut self, action: CartAction) -> &CartState {
        let current = std::mem::take(&mut self.state);
        self.state = current.reduce(action);

        for (_, listener) in self.listeners.iter_mut() {
            listener(&self.state);
        }

        &self.state
    }

    /// Registers a listener called with the new state after each dispatch.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&CartState) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener. Returns false if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sub, _)| *sub != id);
        self.listeners.len() != before
    }
}

impl fmt::Debug for CartStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartStore")
            .field("state", &self.state)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::cart_total;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn product(id: u64, price_cents: i64) -> Product {
        Product::new(id, format!("Product {}", id), Money::from_cents(price_cents), "misc")
    }

    fn quantities(cart: &CartState) -> Vec<(ProductId, u32)> {
        cart.items()
            .iter()
            .map(|line| (line.product().id.clone(), line.quantity()))
            .collect()
    }

    #[test]
    fn test_add_same_product_twice_merges() {
        let p = product(1, 999);

        let cart = CartState::new().add_to_cart(p.clone()).add_to_cart(p);

        assert_eq!(quantities(&cart), vec![(ProductId::Number(1), 2)]);
        assert_eq!(cart_total(cart.items()).to_decimal_string(), "19.98");
    }

    #[test]
    fn test_add_keeps_first_snapshot() {
        let original = product(1, 999);
        let repriced = Product {
            title: "Renamed".to_string(),
            price: Money::from_cents(5000),
            ..original.clone()
        };

        let cart = CartState::new().add_to_cart(original).add_to_cart(repriced);

        assert_eq!(cart.items()[0].product().title, "Product 1");
        assert_eq!(cart.items()[0].product().price.cents(), 999);
        assert_eq!(cart.items()[0].quantity(), 2);
    }

    #[test]
    fn test_add_appends_in_first_added_order() {
        let cart = CartState::new()
            .add_to_cart(product(3, 100))
            .add_to_cart(product(1, 100))
            .add_to_cart(product(3, 100))
            .add_to_cart(product(2, 100));

        let ids: Vec<_> = cart.items().iter().map(|l| l.product().id.clone()).collect();
        assert_eq!(
            ids,
            vec![ProductId::Number(3), ProductId::Number(1), ProductId::Number(2)]
        );
    }

    #[test]
    fn test_remove_from_cart() {
        let cart = CartState::new()
            .add_to_cart(product(1, 100))
            .add_to_cart(product(1, 100))
            .add_to_cart(product(2, 100));

        let cart = cart.remove_from_cart(&ProductId::Number(2));

        assert_eq!(quantities(&cart), vec![(ProductId::Number(1), 2)]);
    }

    #[test]
    fn test_missing_id_is_noop() {
        let cart = CartState::new().add_to_cart(product(1, 100));
        let missing = ProductId::Number(99);

        assert_eq!(cart.clone().remove_from_cart(&missing), cart);
        assert_eq!(cart.clone().increase_quantity(&missing), cart);
        assert_eq!(cart.clone().decrease_quantity(&missing), cart);
    }

    #[test]
    fn test_increase_and_decrease() {
        let id = ProductId::Number(1);
        let cart = CartState::new()
            .add_to_cart(product(1, 100))
            .increase_quantity(&id)
            .increase_quantity(&id);
        assert_eq!(cart.items()[0].quantity(), 3);

        let cart = cart.decrease_quantity(&id);
        assert_eq!(cart.items()[0].quantity(), 2);
    }

    #[test]
    fn test_decrease_stops_at_one() {
        let id = ProductId::Number(1);
        let cart = CartState::new().add_to_cart(product(1, 100));

        let cart = cart.decrease_quantity(&id).decrease_quantity(&id);

        assert_eq!(quantities(&cart), vec![(id, 1)]);
    }

    #[test]
    fn test_clear_cart() {
        let cart = CartState::new()
            .add_to_cart(product(1, 100))
            .add_to_cart(product(2, 100));
        assert!(!cart.is_empty());

        let cart = cart.clear_cart();
        assert!(cart.is_empty());
        assert!(CartState::new().clear_cart().is_empty());
    }

    #[test]
    fn test_reduce_matches_methods() {
        let p = product(1, 250);
        let id = p.id.clone();

        let via_reduce = CartState::new()
            .reduce(CartAction::Add(p.clone()))
            .reduce(CartAction::Increase(id.clone()))
            .reduce(CartAction::Decrease(id.clone()));
        let via_methods = CartState::new()
            .add_to_cart(p)
            .increase_quantity(&id)
            .decrease_quantity(&id);

        assert_eq!(via_reduce, via_methods);
        assert!(via_reduce.reduce(CartAction::Remove(id)).is_empty());
    }

    #[test]
    fn test_quantity_saturates() {
        let mut cart = CartState::new().add_to_cart(product(1, 1));
        cart.items[0].quantity = u32::MAX;

        let cart = cart.increase_quantity(&ProductId::Number(1));
        assert_eq!(cart.items()[0].quantity(), u32::MAX);
    }

    #[test]
    fn test_store_dispatch_updates_state() {
        let mut store = CartStore::new();

        store.dispatch(CartAction::Add(product(1, 999)));
        let state = store.dispatch(CartAction::Add(product(1, 999)));

        assert_eq!(state.items()[0].quantity(), 2);
        assert_eq!(store.state().items().len(), 1);
    }

    #[test]
    fn test_store_notifies_subscribers_in_order() {
        let mut store = CartStore::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let first = Rc::clone(&seen);
        store.subscribe(move |state| first.borrow_mut().push(("first", state.items().len())));
        let second = Rc::clone(&seen);
        store.subscribe(move |state| second.borrow_mut().push(("second", state.items().len())));

        store.dispatch(CartAction::Add(product(1, 100)));
        store.dispatch(CartAction::Remove(ProductId::Number(42)));

        assert_eq!(
            *seen.borrow(),
            vec![("first", 1), ("second", 1), ("first", 1), ("second", 1)]
        );
    }

    #[test]
    fn test_store_unsubscribe() {
        let mut store = CartStore::new();
        let calls = Rc::new(RefCell::new(0));

        let counter = Rc::clone(&calls);
        let id = store.subscribe(move |_| *counter.borrow_mut() += 1);

        store.dispatch(CartAction::Clear);
        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.dispatch(CartAction::Clear);

        assert_eq!(*calls.borrow(), 1);
    }

    #[test]
    fn test_action_names() {
        assert_eq!(CartAction::Clear.name(), "clear_cart");
        assert_eq!(
            CartAction::Decrease(ProductId::Number(1)).name(),
            "decrease_quantity"
        );
    }
}

// =============================================================================
// Property Tests
// =============================================================================
