//! # storefront-core: Pure Cart Logic for the Storefront
//!
//! This crate is the **heart** of the storefront. It owns the cart state
//! machine and every value derived from it, as pure functions with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Storefront Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Presentation Layer (apps/storefront)           │   │
//! │  │    Home ──► Product Detail ──► Cart ──► Order Confirmation      │   │
//! │  └───────────────┬─────────────────────────────┬───────────────────┘   │
//! │                  │ dispatch / subscribe        │ fetch once            │
//! │  ┌───────────────▼─────────────────┐ ┌─────────▼───────────────────┐   │
//! │  │  ★ storefront-core (HERE) ★     │ │  storefront-catalog         │   │
//! │  │                                 │ │  GET /products              │   │
//! │  │  cart    views    money  types  │ │  GET /products/categories   │   │
//! │  │                                 │ └─────────────────────────────┘   │
//! │  │  NO I/O • NO NETWORK • NO CLOCK │                                   │
//! │  └─────────────────────────────────┘                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Product, Rating, ProductId
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`cart`] - Cart line items, the five state transitions, the store
//! - [`views`] - Totals, badge count, per-product quantity, filters, stars
//! - [`error`] - Domain error types
//! - [`validation`] - Checks applied to catalog data before it reaches a cart
//!
//! ## Example Usage
//!
//! ```rust
//! use storefront_core::{cart_total, CartState, Money, Product, ProductId};
//!
//! let product = Product::new(ProductId::Number(1), "Backpack", Money::from_cents(999), "bags");
//!
//! let cart = CartState::new()
//!     .add_to_cart(product.clone())
//!     .add_to_cart(product);
//!
//! assert_eq!(cart.items()[0].quantity(), 2);
//! assert_eq!(cart_total(cart.items()).to_decimal_string(), "19.98");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;
pub mod views;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{CartAction, CartLineItem, CartState, CartStore, SubscriptionId};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;
pub use views::{
    cart_item_count, cart_total, filter_by_category, find_product, quantity_of, star_display,
    CartTotals, ProductAction, StarGlyph,
};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Number of glyphs in a rating display.
pub const STAR_SLOTS: usize = 5;

/// Fractional part of a rating at which the half glyph is shown.
pub const HALF_STAR_THRESHOLD: f64 = 0.5;

/// Highest rating a product can carry.
pub const MAX_RATING: f64 = 5.0;

/// Highest unit price accepted from the catalog ($1,000,000.00).
pub const MAX_PRICE: Money = Money::from_cents(100_000_000);
