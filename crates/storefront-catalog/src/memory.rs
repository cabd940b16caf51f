//! In-memory catalog provider.

use async_trait::async_trait;
use storefront_core::{CategoryName, Product};

use crate::client::{CatalogProvider, CatalogSnapshot};
use crate::error::CatalogResult;

/// Serves a fixed snapshot. Categories are derived from the products
/// (first-seen order) unless given explicitly.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    snapshot: CatalogSnapshot,
}

impl StaticCatalog {
    /// Serves `products`, with categories taken from them.
    pub fn new(products: Vec<Product>) -> Self {
        let mut categories: Vec<CategoryName> = Vec::new();
        for product in &products {
            if !categories.contains(&product.category) {
                categories.push(product.category.clone());
            }
        }

        StaticCatalog {
            snapshot: CatalogSnapshot {
                products,
                categories,
            },
        }
    }

    /// Serves exactly `snapshot`.
    pub fn from_snapshot(snapshot: CatalogSnapshot) -> Self {
        StaticCatalog { snapshot }
    }
}

#[async_trait]
impl CatalogProvider for StaticCatalog {
    async fn list_products(&self) -> CatalogResult<Vec<Product>> {
        Ok(self.snapshot.products.clone())
    }

    async fn list_categories(&self) -> CatalogResult<Vec<CategoryName>> {
        Ok(self.snapshot.categories.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::fetch_catalog;
    use storefront_core::Money;

    #[tokio::test]
    async fn test_static_catalog_derives_categories() {
        let catalog = StaticCatalog::new(vec![
            Product::new(1u64, "Ring", Money::from_cents(9000), "jewelery"),
            Product::new(2u64, "SSD", Money::from_cents(10900), "electronics"),
            Product::new(3u64, "Bracelet", Money::from_cents(1000), "jewelery"),
        ]);

        let snapshot = fetch_catalog(&catalog).await.unwrap();
        assert_eq!(snapshot.products.len(), 3);
        assert_eq!(snapshot.categories, vec!["jewelery", "electronics"]);
    }

    #[tokio::test]
    async fn test_from_snapshot_is_served_verbatim() {
        let snapshot = CatalogSnapshot {
            products: vec![],
            categories: vec!["electronics".to_string()],
        };

        let catalog = StaticCatalog::from_snapshot(snapshot.clone());
        assert_eq!(fetch_catalog(&catalog).await.unwrap(), snapshot);
    }
}
