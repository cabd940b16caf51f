//! # Catalog State
//!
//! What the Home screen knows about the catalog.
//!
//! ```text
//! ┌──────────┐  fetch ok   ┌──────────────────────────┐
//! │ Loading  │────────────►│ Loaded(CatalogSnapshot)  │
//! └──────────┘             └──────────────────────────┘
//!      │ fetch err
//!      └──► stays Loading (error logged, no retry)
//! ```

use storefront_catalog::{fetch_catalog, CatalogProvider, CatalogResult, CatalogSnapshot};
use storefront_core::validation::validate_category_filter;
use storefront_core::{filter_by_category, CategoryName, Product};
use tracing::{error, info};

use crate::error::{AppError, AppResult};

/// Load status of the catalog.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum CatalogStatus {
    /// Fetch not completed (or failed).
    #[default]
    Loading,
    /// Both lists arrived.
    Loaded(CatalogSnapshot),
}

/// Catalog plus the Home screen's category filter.
#[derive(Debug, Clone, Default)]
pub struct CatalogState {
    status: CatalogStatus,
    category: Option<CategoryName>,
}

impl CatalogState {
    /// Starts in the loading state.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> &CatalogStatus {
        &self.status
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self.status, CatalogStatus::Loaded(_))
    }

    /// All products; empty while loading.
    pub fn products(&self) -> &[Product] {
        match &self.status {
            CatalogStatus::Loaded(snapshot) => &snapshot.products,
            CatalogStatus::Loading => &[],
        }
    }

    /// All categories; empty while loading.
    pub fn categories(&self) -> &[CategoryName] {
        match &self.status {
            CatalogStatus::Loaded(snapshot) => &snapshot.categories,
            CatalogStatus::Loading => &[],
        }
    }

    /// Products shown on the Home screen under the current filter.
    pub fn visible_products(&self) -> Vec<&Product> {
        filter_by_category(self.products(), self.category.as_deref())
    }

    pub fn selected_category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// Sets the category filter.
    ///
    /// Once the catalog is loaded the name must be one of its categories.
    pub fn select_category(&mut self, name: &str) -> AppResult<()> {
        let name = validate_category_filter(name)?;

        if self.is_loaded() && !self.categories().contains(&name) {
            return Err(AppError::not_found("Category", &name));
        }

        self.category = Some(name);
        Ok(())
    }

    /// Removes the category filter.
    pub fn clear_category(&mut self) {
        self.category = None;
    }

    /// Records the outcome of a catalog fetch.
    ///
    /// On failure the state stays `Loading` and the error is returned for
    /// the caller to report.
    pub fn apply(&mut self, result: CatalogResult<CatalogSnapshot>) -> AppResult<()> {
        match result {
            Ok(snapshot) => {
                info!(
                    products = snapshot.products.len(),
                    categories = snapshot.categories.len(),
                    "Catalog ready"
                );
                self.status = CatalogStatus::Loaded(snapshot);
                Ok(())
            }
            Err(e) => {
                error!(error = %e, "Catalog fetch failed");
                Err(AppError::from(e))
            }
        }
    }

    /// Fetches the catalog once and records the outcome.
    pub async fn load<P>(&mut self, provider: &P) -> AppResult<()>
    where
        P: CatalogProvider + ?Sized,
    {
        let result = fetch_catalog(provider).await;
        self.apply(result)
    }
}
