//! # Checkout Command
//!
//! "Buy" on the cart screen: confirm the order, then empty the cart.
//!
//! ```text
//! cart (non-empty) ──► OrderConfirmation { order_id, placed_at, totals }
//!                           │
//!                           ▼
//!                      clear_cart ──► Order Confirmation screen
//! ```
//!
//! No payment or order submission happens; the confirmation only exists in
//! this session.

use chrono::{DateTime, Utc};
use serde::Serialize;
use storefront_core::{CartAction, CartTotals, Money};
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::state::CartSession;

/// Summary shown on the Order Confirmation screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderConfirmation {
    /// Reference shown to the customer.
    pub order_id: Uuid,

    /// When the order was placed (UTC).
    pub placed_at: DateTime<Utc>,

    /// Distinct products ordered.
    pub line_count: usize,

    /// Total quantity ordered.
    pub item_count: u64,

    /// Grand total.
    pub total: Money,
}

impl OrderConfirmation {
    fn from_totals(totals: CartTotals) -> Self {
        OrderConfirmation {
            order_id: Uuid::new_v4(),
            placed_at: Utc::now(),
            line_count: totals.line_count,
            item_count: totals.item_count,
            total: totals.total,
        }
    }
}

/// Places the order and clears the cart.
///
/// ## Errors
/// `VALIDATION_ERROR` when the cart is empty; the cart is left untouched.
pub fn place_order(cart: &mut CartSession) -> AppResult<OrderConfirmation> {
    debug!("place_order command");

    if cart.cart().is_empty() {
        return Err(AppError::validation("Your cart is empty."));
    }

    let confirmation = OrderConfirmation::from_totals(CartTotals::from(cart.cart()));
    cart.dispatch(CartAction::Clear);

    info!(
        order_id = %confirmation.order_id,
        items = confirmation.item_count,
        total = %confirmation.total,
        "Order placed"
    );

    Ok(confirmation)
}
