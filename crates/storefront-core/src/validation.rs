//! # Validation Module
//!
//! Checks applied to catalog data and user input before they reach a cart.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Wire decoding (serde)                                        │
//! │  └── Shape and types of the catalog JSON                               │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Catalog provider                                             │
//! │  └── THIS MODULE: drops products that break the rules below            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Cart transitions                                             │
//! │  └── Total functions; assume well-formed products                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use storefront_core::validation::{validate_category_filter, validate_price};
//! use storefront_core::Money;
//!
//! assert!(validate_price(Money::from_cents(1099)).is_ok());
//! assert_eq!(validate_category_filter("  electronics ").unwrap(), "electronics");
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::{Product, ProductId, Rating};
use crate::{MAX_PRICE, MAX_RATING};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

const MAX_TITLE_LEN: usize = 200;
const MAX_FILTER_LEN: usize = 100;

// =============================================================================
// Product Validators
// =============================================================================

/// Validates a product title.
///
/// ## Rules
/// - Must not be empty
/// - At most 200 characters
pub fn validate_title(title: &str) -> ValidationResult<()> {
    let title = title.trim();

    if title.is_empty() {
        return Err(ValidationError::Required {
            field: "title".to_string(),
        });
    }

    if title.chars().count() > MAX_TITLE_LEN {
        return Err(ValidationError::TooLong {
            field: "title".to_string(),
            max: MAX_TITLE_LEN,
        });
    }

    Ok(())
}

/// Validates a price.
///
/// ## Rules
/// - Zero is allowed (free items)
/// - Not negative
/// - At most [`MAX_PRICE`]
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::Negative {
            field: "price".to_string(),
        });
    }

    if price > MAX_PRICE {
        return Err(ValidationError::TooLarge {
            field: "price".to_string(),
            max: MAX_PRICE,
        });
    }

    Ok(())
}

/// Validates a rating: rate must be a number in `[0, 5]`.
pub fn validate_rating(rating: &Rating) -> ValidationResult<()> {
    if !(0.0..=MAX_RATING).contains(&rating.rate) {
        return Err(ValidationError::OutOfRange {
            field: "rating".to_string(),
            min: 0.0,
            max: MAX_RATING,
        });
    }

    Ok(())
}

/// Validates a product id. Text ids must not be blank.
pub fn validate_product_id(id: &ProductId) -> ValidationResult<()> {
    match id {
        ProductId::Text(text) if text.trim().is_empty() => Err(ValidationError::Required {
            field: "id".to_string(),
        }),
        _ => Ok(()),
    }
}

/// Validates everything the cart relies on for one product.
pub fn validate_product(product: &Product) -> ValidationResult<()> {
    validate_product_id(&product.id)?;
    validate_title(&product.title)?;
    validate_price(product.price)?;
    if let Some(rating) = &product.rating {
        validate_rating(rating)?;
    }
    Ok(())
}

// =============================================================================
// Input Validators
// =============================================================================

/// Validates a category filter typed by the user.
///
/// ## Returns
/// The trimmed filter.
pub fn validate_category_filter(filter: &str) -> ValidationResult<String> {
    let filter = filter.trim();

    if filter.is_empty() {
        return Err(ValidationError::Required {
            field: "category".to_string(),
        });
    }

    if filter.chars().count() > MAX_FILTER_LEN {
        return Err(ValidationError::TooLong {
            field: "category".to_string(),
            max: MAX_FILTER_LEN,
        });
    }

    Ok(filter.to_string())
}

/// Parses a product id typed by the user.
pub fn parse_product_id(input: &str) -> ValidationResult<ProductId> {
    if input.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "product id".to_string(),
        });
    }

    // ProductId parsing cannot fail
    Ok(match input.parse::<ProductId>() {
        Ok(id) => id,
        Err(never) => match never {},
    })
}

/// Resolves a product id typed by the user against the ids in play.
///
/// Typed text carries no wire type, so `"42"` matches `Number(42)` and
/// `Text("42")` alike. The first known id that matches wins; with no match
/// the input is parsed with [`parse_product_id`].
///
/// ## Example
/// ```rust
/// use storefront_core::validation::resolve_product_id;
/// use storefront_core::ProductId;
///
/// let known = [ProductId::Text("42".to_string())];
/// assert_eq!(resolve_product_id(" 42 ", &known).unwrap(), known[0]);
/// assert_eq!(resolve_product_id("7", &known).unwrap(), ProductId::Number(7));
/// ```
pub fn resolve_product_id<'a, I>(input: &str, known: I) -> ValidationResult<ProductId>
where
    I: IntoIterator<Item = &'a ProductId>,
{
    let parsed = parse_product_id(input)?;
    let typed = input.trim();

    Ok(known
        .into_iter()
        .find(|id| id.to_string() == typed)
        .cloned()
        .unwrap_or(parsed))
}

// =============================================================================
// Unit Tests
// =============================================================================
