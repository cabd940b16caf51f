//! # Domain Types
//!
//! Catalog types shared by every layer of the storefront.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │    ProductId    │   │     Rating      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  Number(u64)    │   │  rate  0.0..5.0 │       │
//! │  │  title          │   │  Text(String)   │   │  count          │       │
//! │  │  price (Money)  │   └─────────────────┘   └─────────────────┘       │
//! │  │  category       │                                                    │
//! │  │  rating?        │                                                    │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Semantics
//! A `Product` is an immutable value owned by the catalog. The cart stores a
//! clone taken at the moment of adding, so a later catalog reload never
//! changes lines already in the cart.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::money::Money;

/// Category label as served by the catalog (e.g. "electronics").
pub type CategoryName = String;

// =============================================================================
// Product Id
// =============================================================================

/// Product identifier, stable for the session.
///
/// The catalog API may send ids as JSON numbers or strings; both are kept
/// as-is. `Number(3)` and `Text("3")` are different ids; user input is
/// matched against either form by `validation::resolve_product_id`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum ProductId {
    Number(u64),
    Text(String),
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductId::Number(n) => write!(f, "{}", n),
            ProductId::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Parses user input into an id. Never fails: digits become `Number`,
/// anything else `Text`.
impl FromStr for ProductId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Ok(match s.parse::<u64>() {
            Ok(n) => ProductId::Number(n),
            Err(_) => ProductId::Text(s.to_string()),
        })
    }
}

impl From<u64> for ProductId {
    fn from(id: u64) -> Self {
        ProductId::Number(id)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        ProductId::Text(id.to_string())
    }
}

// =============================================================================
// Rating
// =============================================================================

/// Aggregate customer rating.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Rating {
    /// Average rate, 0.0 to 5.0.
    pub rate: f64,

    /// Number of ratings.
    pub count: u32,
}

// =============================================================================
// Product
// =============================================================================

/// A product served by the catalog.
///
/// ## Wire Format
/// ```json
/// {
///   "id": 1,
///   "title": "Fjallraven Backpack",
///   "price": 109.95,
///   "description": "Your perfect pack for everyday use",
///   "category": "men's clothing",
///   "image": "https://fakestoreapi.com/img/81fPKd-2AYL._AC_SL1500_.jpg",
///   "rating": { "rate": 3.9, "count": 120 }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Unique identifier.
    pub id: ProductId,

    /// Display name.
    pub title: String,

    /// Longer description for the detail view.
    #[serde(default)]
    pub description: String,

    /// Unit price; a decimal number on the wire.
    #[serde(with = "crate::money::decimal")]
    #[ts(as = "f64")]
    pub price: Money,

    /// Image URI.
    #[serde(default)]
    pub image: String,

    /// Category label used by the category filter.
    pub category: CategoryName,

    /// Customer rating, when the catalog provides one.
    #[serde(default)]
    pub rating: Option<Rating>,
}

impl Product {
    /// Creates a product with no description, image or rating.
    pub fn new(
        id: impl Into<ProductId>,
        title: impl Into<String>,
        price: Money,
        category: impl Into<CategoryName>,
    ) -> Self {
        Product {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            price,
            image: String::new(),
            category: category.into(),
            rating: None,
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the image URI.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Sets the rating.
    pub fn with_rating(mut self, rate: f64, count: u32) -> Self {
        self.rating = Some(Rating { rate, count });
        self
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_id_from_str() {
        assert_eq!("42".parse::<ProductId>().unwrap(), ProductId::Number(42));
        assert_eq!(" 7 ".parse::<ProductId>().unwrap(), ProductId::Number(7));
        assert_eq!(
            "abc-1".parse::<ProductId>().unwrap(),
            ProductId::Text("abc-1".to_string())
        );
    }

    #[test]
    fn test_product_id_wire_forms() {
        let n: ProductId = serde_json::from_str("5").unwrap();
        assert_eq!(n, ProductId::Number(5));

        let s: ProductId = serde_json::from_str(r#""p-5""#).unwrap();
        assert_eq!(s, ProductId::Text("p-5".to_string()));

        assert_ne!(ProductId::Number(5), ProductId::Text("5".to_string()));
    }

    #[test]
    fn test_product_decodes_catalog_payload() {
        let json = r#"{
            "id": 1,
            "title": "Fjallraven Backpack",
            "price": 109.95,
            "description": "Your perfect pack for everyday use",
            "category": "men's clothing",
            "image": "https://example.com/1.jpg",
            "rating": { "rate": 3.9, "count": 120 }
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, ProductId::Number(1));
        assert_eq!(product.price.cents(), 10995);
        assert_eq!(product.category, "men's clothing");
        assert_eq!(
            product.rating,
            Some(Rating {
                rate: 3.9,
                count: 120
            })
        );
    }

    #[test]
    fn test_product_optional_fields_default() {
        let json = r#"{"id": "x1", "title": "Mug", "price": 4, "category": "kitchen"}"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, ProductId::Text("x1".to_string()));
        assert!(product.description.is_empty());
        assert!(product.image.is_empty());
        assert!(product.rating.is_none());
    }

    #[test]
    fn test_product_serializes_price_as_decimal() {
        let product = Product::new(3u64, "Mug", Money::from_cents(450), "kitchen");
        let value = serde_json::to_value(&product).unwrap();
        assert_eq!(value["price"], serde_json::json!(4.5));
        assert_eq!(value["id"], serde_json::json!(3));
    }
}
