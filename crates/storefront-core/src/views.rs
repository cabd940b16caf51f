//! # Derived Views
//!
//! Pure projections over cart and catalog data. Nothing here is cached:
//! every screen recomputes what it needs from the current state.
//!
//! ## Where Each View Is Used
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  cart_total ─────────► Cart screen footer        "Total: $19.98"        │
//! │  cart_item_count ────► Cart badge                 "Cart (3)"            │
//! │  quantity_of ────────► Product detail             [Add] vs [- 2 +]      │
//! │  filter_by_category ─► Home screen list                                 │
//! │  star_display ───────► Product detail rating     ★★★⯪☆                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use ts_rs::TS;

use crate::cart::{CartLineItem, CartState};
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{Product, ProductId};
use crate::{HALF_STAR_THRESHOLD, MAX_RATING, STAR_SLOTS};

// =============================================================================
// Cart Views
// =============================================================================

/// Sum of `price × quantity` over all lines.
///
/// Render with [`Money::to_decimal_string`] for the two-digit form.
pub fn cart_total(items: &[CartLineItem]) -> Money {
    items.iter().map(CartLineItem::line_total).sum()
}

/// Sum of quantities (the cart badge).
pub fn cart_item_count(items: &[CartLineItem]) -> u64 {
    items.iter().map(|line| u64::from(line.quantity())).sum()
}

/// Quantity of `product_id` in the cart, 0 when absent.
pub fn quantity_of(items: &[CartLineItem], product_id: &ProductId) -> u32 {
    items
        .iter()
        .find(|line| &line.product().id == product_id)
        .map_or(0, CartLineItem::quantity)
}

/// Cart totals summary for responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartTotals {
    /// Number of distinct lines.
    pub line_count: usize,

    /// Sum of quantities.
    pub item_count: u64,

    /// Grand total.
    pub total: Money,
}

impl From<&CartState> for CartTotals {
    fn from(cart: &CartState) -> Self {
        CartTotals {
            line_count: cart.items().len(),
            item_count: cart_item_count(cart.items()),
            total: cart_total(cart.items()),
        }
    }
}

/// What the product detail view offers for one product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ProductAction {
    /// Not in the cart yet: show an "Add" button.
    Add,
    /// Already in the cart: show a quantity stepper.
    Stepper { quantity: u32 },
}

impl ProductAction {
    /// Picks the action from the result of [`quantity_of`].
    pub fn for_quantity(quantity: u32) -> Self {
        if quantity == 0 {
            ProductAction::Add
        } else {
            ProductAction::Stepper { quantity }
        }
    }
}

// =============================================================================
// Catalog Views
// =============================================================================

/// Products in `category`, in their original order. `None` keeps everything.
pub fn filter_by_category<'a>(products: &'a [Product], category: Option<&str>) -> Vec<&'a Product> {
    match category {
        None => products.iter().collect(),
        Some(category) => products
            .iter()
            .filter(|product| product.category == category)
            .collect(),
    }
}

/// Looks a product up by id.
pub fn find_product<'a>(products: &'a [Product], product_id: &ProductId) -> CoreResult<&'a Product> {
    products
        .iter()
        .find(|product| &product.id == product_id)
        .ok_or_else(|| CoreError::ProductNotFound(product_id.clone()))
}

// =============================================================================
// Rating Stars
// =============================================================================

/// One slot of a rating display.
///
/// `Half` is its own glyph, not a half-filled `Full`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StarGlyph {
    Full,
    Half,
    Empty,
}

impl StarGlyph {
    /// Symbol used by text screens.
    pub fn symbol(&self) -> char {
        match self {
            StarGlyph::Full => '★',
            StarGlyph::Half => '⯪',
            StarGlyph::Empty => '☆',
        }
    }
}

/// Five glyphs for `rate`: `floor(rate)` full, one half glyph when the
/// fraction is at least 0.5, empty for the rest.
///
/// Rates are clamped into `[0, 5]`; NaN counts as 0.
///
/// ## Example
/// ```rust
/// use storefront_core::{star_display, StarGlyph};
///
/// let stars = star_display(3.7);
/// assert_eq!(stars, [
///     StarGlyph::Full, StarGlyph::Full, StarGlyph::Full,
///     StarGlyph::Half, StarGlyph::Empty,
/// ]);
/// ```
pub fn star_display(rate: f64) -> [StarGlyph; STAR_SLOTS] {
    let rate = if rate.is_nan() { 0.0 } else { rate.clamp(0.0, MAX_RATING) };
    let full = rate.floor() as usize;
    let half = full < STAR_SLOTS && rate - rate.floor() >= HALF_STAR_THRESHOLD;

    let mut glyphs = [StarGlyph::Empty; STAR_SLOTS];
    for glyph in glyphs.iter_mut().take(full) {
        *glyph = StarGlyph::Full;
    }
    if half {
        glyphs[full] = StarGlyph::Half;
    }
    glyphs
}

// =============================================================================
// Unit Tests
// =============================================================================
