//! # Cart Commands
//!
//! Session commands for cart manipulation.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────────────────┐            │
//! │  │  Empty   │────►│ In Cart  │────►│ Order Confirmation   │            │
//! │  │  Cart    │     │          │     │                      │            │
//! │  └──────────┘     └──────────┘     └──────────────────────┘            │
//! │                        │                    │                           │
//! │                   add_to_cart          place_order                     │
//! │                   increase_quantity    (checkout.rs)                   │
//! │                   decrease_quantity                                    │
//! │                   remove_from_cart                                     │
//! │                        │                                                │
//! │                        ▼                                                │
//! │                   clear_cart ──────────────────────►  (back to empty)  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Operations on ids that are not in the cart leave it unchanged.

use serde::Serialize;
use storefront_core::validation::resolve_product_id;
use storefront_core::{find_product, CartAction, CartLineItem, CartState, CartTotals, ProductId};
use tracing::debug;

use crate::error::AppResult;
use crate::state::{CartSession, CatalogState};

/// Cart response including items and totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<CartLineItem>,
    pub totals: CartTotals,
}

impl From<&CartState> for CartResponse {
    fn from(cart: &CartState) -> Self {
        CartResponse {
            items: cart.items().to_vec(),
            totals: CartTotals::from(cart),
        }
    }
}

/// Gets the current cart contents.
pub fn get_cart(cart: &CartSession) -> CartResponse {
    debug!("get_cart command");
    CartResponse::from(cart.cart())
}

/// Adds a catalog product to the cart.
///
/// ## Behavior
/// - If product already in cart: quantity increases by one
/// - If product not in cart: added as a new line with quantity 1
/// - The line keeps the product as it was when first added
///
/// ## Errors
/// - `VALIDATION_ERROR` for a blank id
/// - `NOT_FOUND` when the catalog has no such product
pub fn add_to_cart(
    catalog: &CatalogState,
    cart: &mut CartSession,
    product_id: &str,
) -> AppResult<CartResponse> {
    debug!(product_id = %product_id, "add_to_cart command");

    let id = resolve_product_id(product_id, catalog.products().iter().map(|p| &p.id))?;
    let product = find_product(catalog.products(), &id)?.clone();

    Ok(CartResponse::from(cart.dispatch(CartAction::Add(product))))
}

/// Resolves typed input against the ids already in the cart.
fn cart_line_id(cart: &CartSession, product_id: &str) -> AppResult<ProductId> {
    let items = cart.cart().items();
    Ok(resolve_product_id(
        product_id,
        items.iter().map(|line| &line.product().id),
    )?)
}

/// Increases a line's quantity by one.
pub fn increase_quantity(cart: &mut CartSession, product_id: &str) -> AppResult<CartResponse> {
    debug!(product_id = %product_id, "increase_quantity command");

    let id = cart_line_id(cart, product_id)?;
    Ok(CartResponse::from(cart.dispatch(CartAction::Increase(id))))
}

/// Decreases a line's quantity by one, never below 1.
pub fn decrease_quantity(cart: &mut CartSession, product_id: &str) -> AppResult<CartResponse> {
    debug!(product_id = %product_id, "decrease_quantity command");

    let id = cart_line_id(cart, product_id)?;
    Ok(CartResponse::from(cart.dispatch(CartAction::Decrease(id))))
}

/// Removes a line from the cart.
pub fn remove_from_cart(cart: &mut CartSession, product_id: &str) -> AppResult<CartResponse> {
    debug!(product_id = %product_id, "remove_from_cart command");

    let id = cart_line_id(cart, product_id)?;
    Ok(CartResponse::from(cart.dispatch(CartAction::Remove(id))))
}

/// Clears all items from the cart.
pub fn clear_cart(cart: &mut CartSession) -> CartResponse {
    debug!("clear_cart command");
    CartResponse::from(cart.dispatch(CartAction::Clear))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use storefront_catalog::{CatalogSnapshot, StaticCatalog};
    use storefront_core::{Money, Product, ProductId};

    async fn loaded_catalog() -> CatalogState {
        let mut state = CatalogState::new();
        state
            .load(&StaticCatalog::new(vec![
                Product::new(1u64, "Backpack", Money::from_cents(999), "bags"),
                Product::new(2u64, "Shirt", Money::from_cents(2250), "clothing"),
            ]))
            .await
            .unwrap();
        state
    }

    #[tokio::test]
    async fn test_add_same_product_merges() {
        let catalog = loaded_catalog().await;
        let mut cart = CartSession::new();

        add_to_cart(&catalog, &mut cart, "1").unwrap();
        let response = add_to_cart(&catalog, &mut cart, "1").unwrap();

        assert_eq!(response.items.len(), 1);
        assert_eq!(response.items[0].quantity(), 2);
        assert_eq!(response.totals.total.to_decimal_string(), "19.98");
    }

    #[tokio::test]
    async fn test_add_unknown_product() {
        let catalog = loaded_catalog().await;
        let mut cart = CartSession::new();

        let err = add_to_cart(&catalog, &mut cart, "42").unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert!(get_cart(&cart).items.is_empty());

        let err = add_to_cart(&catalog, &mut cart, "  ").unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_add_while_loading_is_not_found() {
        let catalog = CatalogState::new();
        let mut cart = CartSession::new();

        let err = add_to_cart(&catalog, &mut cart, "1").unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[tokio::test]
    async fn test_quantity_commands() {
        let catalog = loaded_catalog().await;
        let mut cart = CartSession::new();
        add_to_cart(&catalog, &mut cart, "2").unwrap();

        let response = increase_quantity(&mut cart, "2").unwrap();
        assert_eq!(response.totals.item_count, 2);

        decrease_quantity(&mut cart, "2").unwrap();
        let response = decrease_quantity(&mut cart, "2").unwrap();
        assert_eq!(response.items[0].quantity(), 1);

        let response = increase_quantity(&mut cart, "99").unwrap();
        assert_eq!(response.totals.item_count, 1);

        let response = remove_from_cart(&mut cart, "2").unwrap();
        assert!(response.items.is_empty());
        assert!(response.totals.total.is_zero());
    }

    #[tokio::test]
    async fn test_cart_keeps_product_snapshot() {
        let mut catalog = CatalogState::new();
        catalog
            .apply(Ok(CatalogSnapshot {
                products: vec![Product::new(1u64, "Mug", Money::from_cents(450), "kitchen")],
                categories: vec!["kitchen".into()],
            }))
            .unwrap();

        let mut cart = CartSession::new();
        add_to_cart(&catalog, &mut cart, "1").unwrap();

        catalog
            .apply(Ok(CatalogSnapshot {
                products: vec![Product::new(1u64, "Mug", Money::from_cents(900), "kitchen")],
                categories: vec!["kitchen".into()],
            }))
            .unwrap();

        let response = get_cart(&cart);
        assert_eq!(response.items[0].product().price.cents(), 450);
        assert_eq!(response.items[0].product().id, ProductId::Number(1));
    }

    #[tokio::test]
    async fn test_clear_cart() {
        let catalog = loaded_catalog().await;
        let mut cart = CartSession::new();
        add_to_cart(&catalog, &mut cart, "1").unwrap();
        add_to_cart(&catalog, &mut cart, "2").unwrap();

        let response = clear_cart(&mut cart);
        assert!(response.items.is_empty());
        assert_eq!(response.totals.line_count, 0);
    }

    #[tokio::test]
    async fn test_response_json_shape() {
        let catalog = loaded_catalog().await;
        let mut cart = CartSession::new();
        let response = add_to_cart(&catalog, &mut cart, "1").unwrap();

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["totals"]["itemCount"], 1);
        assert_eq!(json["items"][0]["quantity"], 1);
    }
}
