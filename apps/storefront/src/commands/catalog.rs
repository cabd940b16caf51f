//! # Catalog Commands
//!
//! Product listing, category filter and product detail.

use serde::Serialize;
use storefront_core::validation::resolve_product_id;
use storefront_core::{
    find_product, quantity_of, star_display, CategoryName, Product, ProductAction, ProductId,
    StarGlyph, STAR_SLOTS,
};
use tracing::debug;

use crate::error::AppResult;
use crate::state::{CartSession, CatalogState};

/// Home screen listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductListResponse {
    /// True until the catalog fetch has succeeded.
    pub loading: bool,

    /// Active category filter, if any.
    pub category: Option<CategoryName>,

    /// Products under the filter, in catalog order.
    pub products: Vec<Product>,
}

/// Everything the product detail view shows.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetail {
    pub product: Product,

    /// Quantity of this product currently in the cart.
    pub quantity: u32,

    /// "Add" button or quantity stepper.
    pub action: ProductAction,

    /// Rating glyphs; all empty for an unrated product.
    pub stars: [StarGlyph; STAR_SLOTS],
}

/// Lists products under the current category filter.
pub fn list_products(catalog: &CatalogState) -> ProductListResponse {
    debug!(category = ?catalog.selected_category(), "list_products command");

    ProductListResponse {
        loading: !catalog.is_loaded(),
        category: catalog.selected_category().map(str::to_string),
        products: catalog.visible_products().into_iter().cloned().collect(),
    }
}

/// Lists category names.
pub fn list_categories(catalog: &CatalogState) -> Vec<CategoryName> {
    debug!("list_categories command");
    catalog.categories().to_vec()
}

/// Sets the category filter (`None` clears it).
pub fn select_category(
    catalog: &mut CatalogState,
    category: Option<&str>,
) -> AppResult<ProductListResponse> {
    debug!(category = ?category, "select_category command");

    match category {
        Some(name) => catalog.select_category(name)?,
        None => catalog.clear_category(),
    }

    Ok(list_products(catalog))
}

/// Builds the detail view for one product.
pub fn product_detail(
    catalog: &CatalogState,
    cart: &CartSession,
    product_id: &str,
) -> AppResult<ProductDetail> {
    debug!(product_id = %product_id, "product_detail command");

    let id = resolve_product_id(product_id, catalog.products().iter().map(|p| &p.id))?;
    product_detail_by_id(catalog, cart, &id)
}

/// Builds the detail view for an already-parsed id.
pub fn product_detail_by_id(
    catalog: &CatalogState,
    cart: &CartSession,
    id: &ProductId,
) -> AppResult<ProductDetail> {
    let product = find_product(catalog.products(), id)?.clone();
    let quantity = quantity_of(cart.cart().items(), id);
    let stars = star_display(product.rating.map_or(0.0, |rating| rating.rate));

    Ok(ProductDetail {
        product,
        quantity,
        action: ProductAction::for_quantity(quantity),
        stars,
    })
}
