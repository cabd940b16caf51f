//! # Catalog Client
//!
//! The Catalog Provider seam and its HTTP implementation.
//!
//! ## Fetch Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      One-Shot Catalog Fetch                             │
//! │                                                                         │
//! │  fetch_catalog(provider)                                                │
//! │       │                                                                 │
//! │       ├──► list_products()    GET /products             ─┐             │
//! │       │                                                   │ concurrent  │
//! │       └──► list_categories()  GET /products/categories  ─┘             │
//! │                    │                                                    │
//! │                    ▼                                                    │
//! │  both Ok  ──► CatalogSnapshot { products, categories }                 │
//! │  either Err ─► CatalogError (nothing is half-applied)                  │
//! │                                                                         │
//! │  No retry • no timeout • no cancellation                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use storefront_core::validation::validate_product;
use storefront_core::{CategoryName, Product};
use tracing::{debug, info, warn};
use url::Url;

use crate::config::CatalogConfig;
use crate::error::{CatalogError, CatalogResult};

// =============================================================================
// Provider Trait
// =============================================================================

/// Source of products and categories.
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    /// All products, in catalog order.
    async fn list_products(&self) -> CatalogResult<Vec<Product>>;

    /// All category names.
    async fn list_categories(&self) -> CatalogResult<Vec<CategoryName>>;
}

/// Everything one catalog load produces.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    pub products: Vec<Product>,
    pub categories: Vec<CategoryName>,
}

/// Fetches products and categories concurrently.
///
/// Returns a snapshot only when both requests succeed, so a consumer
/// replaces its lists in one step.
pub async fn fetch_catalog<P>(provider: &P) -> CatalogResult<CatalogSnapshot>
where
    P: CatalogProvider + ?Sized,
{
    let (products, categories) =
        tokio::try_join!(provider.list_products(), provider.list_categories())?;

    info!(
        products = products.len(),
        categories = categories.len(),
        "Catalog loaded"
    );

    Ok(CatalogSnapshot {
        products,
        categories,
    })
}

/// Drops products that fail validation, keeping the rest in order.
pub fn retain_valid(products: Vec<Product>) -> Vec<Product> {
    products
        .into_iter()
        .filter(|product| match validate_product(product) {
            Ok(()) => true,
            Err(e) => {
                warn!(product_id = %product.id, error = %e, "Dropping invalid product");
                false
            }
        })
        .collect()
}

// =============================================================================
// HTTP Client
// =============================================================================

/// Catalog provider backed by the REST API.
///
/// ## Usage
/// ```rust,ignore
/// let client = HttpCatalogClient::new(CatalogConfig::load_or_default(None))?;
/// let snapshot = fetch_catalog(&client).await?;
/// ```
#[derive(Debug, Clone)]
pub struct HttpCatalogClient {
    http: reqwest::Client,
    config: CatalogConfig,
}

impl HttpCatalogClient {
    /// Creates a client for a validated config.
    pub fn new(config: CatalogConfig) -> CatalogResult<Self> {
        config.validate()?;

        let http = reqwest::Client::builder()
            .user_agent(config.api.user_agent.clone())
            .build()?;

        Ok(HttpCatalogClient { http, config })
    }

    /// The config this client was built with.
    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// `GET url` and decode the JSON body; `endpoint` names it in errors.
    async fn get_json<T: DeserializeOwned>(&self, endpoint: &str, url: Url) -> CatalogResult<T> {
        debug!(%url, "Fetching from catalog");

        let response = self.http.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::UnexpectedStatus {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl CatalogProvider for HttpCatalogClient {
    async fn list_products(&self) -> CatalogResult<Vec<Product>> {
        let products: Vec<Product> = self
            .get_json("products", self.config.products_url()?)
            .await?;
        let fetched = products.len();

        let products = retain_valid(products);
        debug!(fetched, kept = products.len(), "Products fetched");

        Ok(products)
    }

    async fn list_categories(&self) -> CatalogResult<Vec<CategoryName>> {
        let categories: Vec<CategoryName> = self
            .get_json("products/categories", self.config.categories_url()?)
            .await?;
        debug!(count = categories.len(), "Categories fetched");
        Ok(categories)
    }
}
