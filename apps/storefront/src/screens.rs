//! # Screens
//!
//! Text rendering of the four screens.
//!
//! ```text
//! ┌────────┐  show <id>  ┌────────────────┐
//! │  Home  │────────────►│ Product Detail │
//! └────────┘             └────────────────┘
//!     │ cart                     │ cart
//!     ▼                          ▼
//! ┌────────┐    buy     ┌────────────────────┐   home   ┌────────┐
//! │  Cart  │───────────►│ Order Confirmation │─────────►│  Home  │
//! └────────┘            └────────────────────┘          └────────┘
//! ```
//!
//! Renderers are pure: they take command responses and return text.

use storefront_core::{CategoryName, ProductAction, ProductId, StarGlyph};

use crate::commands::cart::CartResponse;
use crate::commands::catalog::{ProductDetail, ProductListResponse};
use crate::commands::checkout::OrderConfirmation;
use crate::state::ConfigState;

/// Which screen the session is on.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Screen {
    #[default]
    Home,
    ProductDetail(ProductId),
    Cart,
    OrderConfirmation(OrderConfirmation),
}

impl Screen {
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Home => "Home",
            Screen::ProductDetail(_) => "Product",
            Screen::Cart => "Cart",
            Screen::OrderConfirmation(_) => "Order Confirmation",
        }
    }
}

fn header(config: &ConfigState, title: &str, badge: u64) -> String {
    format!("== {} | {} ==  Cart ({})", config.store_name, title, badge)
}

/// Home: loading indicator or the product list.
pub fn render_home(config: &ConfigState, list: &ProductListResponse, badge: u64) -> String {
    let mut lines = vec![header(config, Screen::Home.title(), badge)];

    if list.loading {
        lines.push("Loading…".to_string());
        return lines.join("\n");
    }

    lines.push(format!("Category: {}", list.category.as_deref().unwrap_or("all")));

    if list.products.is_empty() {
        lines.push("No products in this category.".to_string());
    }

    for product in &list.products {
        lines.push(format!(
            "  #{}  {}  {}  [{}]",
            product.id,
            product.title,
            config.format_currency(product.price),
            product.category
        ));
    }

    lines.join("\n")
}

/// Category list, marking the active filter.
pub fn render_categories(categories: &[CategoryName], selected: Option<&str>) -> String {
    if categories.is_empty() {
        return "No categories loaded.".to_string();
    }

    categories
        .iter()
        .map(|name| {
            let marker = if Some(name.as_str()) == selected { "*" } else { " " };
            format!("{} {}", marker, name)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Rating glyphs as one string.
pub fn render_stars(stars: &[StarGlyph]) -> String {
    stars.iter().map(StarGlyph::symbol).collect()
}

/// Product detail with "Add" button or quantity stepper.
pub fn render_product_detail(config: &ConfigState, detail: &ProductDetail, badge: u64) -> String {
    let product = &detail.product;

    let mut lines = vec![
        header(config, "Product", badge),
        product.title.clone(),
        config.format_currency(product.price),
    ];

    match product.rating {
        Some(rating) => lines.push(format!(
            "{}  {:.1} ({} ratings)",
            render_stars(&detail.stars),
            rating.rate,
            rating.count
        )),
        None => lines.push(format!("{}  No ratings yet", render_stars(&detail.stars))),
    }

    lines.push(product.category.clone());
    if !product.description.is_empty() {
        lines.push(product.description.clone());
    }

    lines.push(match detail.action {
        ProductAction::Add => format!("[ Add to cart ]  (add {})", product.id),
        ProductAction::Stepper { quantity } => format!(
            "[ - ]  {}  [ + ]  (dec {id} / inc {id})",
            quantity,
            id = product.id
        ),
    });

    lines.join("\n")
}

/// Cart lines, total and the Buy button.
pub fn render_cart(config: &ConfigState, cart: &CartResponse) -> String {
    let mut lines = vec![header(config, Screen::Cart.title(), cart.totals.item_count)];

    if cart.items.is_empty() {
        lines.push("Your cart is empty.".to_string());
        return lines.join("\n");
    }

    for line in &cart.items {
        let product = line.product();
        lines.push(format!(
            "  {:>3} x {}  {}  {}",
            line.quantity(),
            product.title,
            config.format_currency(product.price),
            config.format_currency(line.line_total())
        ));
    }

    lines.push(format!("Total: {}", config.format_currency(cart.totals.total)));
    lines.push("[ Buy ]".to_string());

    lines.join("\n")
}

/// Order Confirmation screen.
pub fn render_confirmation(config: &ConfigState, confirmation: &OrderConfirmation) -> String {
    [
        header(config, "Order Confirmation", 0),
        "Thank you for your order!".to_string(),
        format!("Order {}", confirmation.order_id),
        format!(
            "{} items  Total: {}",
            confirmation.item_count,
            config.format_currency(confirmation.total)
        ),
        "[ Back to Home ]".to_string(),
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::{CartAction, CartState, Money, Product};

    fn backpack() -> Product {
        Product::new(1u64, "Backpack", Money::from_cents(999), "bags")
            .with_description("Fits a laptop")
            .with_rating(3.7, 120)
    }

    #[test]
    fn test_home_loading() {
        let list = ProductListResponse {
            loading: true,
            category: None,
            products: vec![],
        };

        let text = render_home(&ConfigState::default(), &list, 0);
        assert!(text.contains("Loading…"));
        assert!(text.contains("Cart (0)"));
    }

    #[test]
    fn test_home_lists_products() {
        let list = ProductListResponse {
            loading: false,
            category: Some("bags".into()),
            products: vec![backpack()],
        };

        let text = render_home(&ConfigState::default(), &list, 2);
        assert!(text.contains("Category: bags"));
        assert!(text.contains("Backpack  $9.99  [bags]"));
        assert!(text.contains("Cart (2)"));
    }

    #[test]
    fn test_categories_marks_selection() {
        let categories = vec!["bags".to_string(), "shoes".to_string()];
        assert_eq!(render_categories(&categories, Some("shoes")), "  bags\n* shoes");
    }

    #[test]
    fn test_product_detail_add_then_stepper() {
        let config = ConfigState::default();
        let mut detail = ProductDetail {
            product: backpack(),
            quantity: 0,
            action: ProductAction::Add,
            stars: storefront_core::star_display(3.7),
        };

        let text = render_product_detail(&config, &detail, 0);
        assert!(text.contains("★★★⯪☆  3.7 (120 ratings)"));
        assert!(text.contains("Fits a laptop"));
        assert!(text.contains("[ Add to cart ]"));

        detail.quantity = 2;
        detail.action = ProductAction::Stepper { quantity: 2 };
        let text = render_product_detail(&config, &detail, 2);
        assert!(text.contains("[ - ]  2  [ + ]"));
    }

    #[test]
    fn test_cart_empty_and_total() {
        let config = ConfigState::default();

        let empty = CartResponse::from(&CartState::new());
        assert!(render_cart(&config, &empty).contains("Your cart is empty."));

        let cart = CartState::new()
            .reduce(CartAction::Add(backpack()))
            .reduce(CartAction::Add(backpack()));
        let text = render_cart(&config, &CartResponse::from(&cart));
        assert!(text.contains("2 x Backpack  $9.99  $19.98"));
        assert!(text.contains("Total: $19.98"));
        assert!(text.contains("[ Buy ]"));
    }
}
