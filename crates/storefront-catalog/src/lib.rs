//! # storefront-catalog: Catalog Provider
//!
//! This crate fetches products and categories from the remote catalog
//! service. It is the only crate in the workspace that touches the network.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Catalog Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────┐         ┌──────────────────────────────────────┐  │
//! │  │ CatalogConfig   │────────►│ HttpCatalogClient (reqwest)          │  │
//! │  │ toml + env      │         │   GET {base}/products                │  │
//! │  └─────────────────┘         │   GET {base}/products/categories     │  │
//! │                              └──────────────────┬───────────────────┘  │
//! │                                                 │ impl                  │
//! │                              ┌──────────────────▼───────────────────┐  │
//! │  ┌─────────────────┐  impl   │ trait CatalogProvider                │  │
//! │  │ StaticCatalog   │────────►│   list_products / list_categories    │  │
//! │  │ (in memory)     │         └──────────────────┬───────────────────┘  │
//! │  └─────────────────┘                            │                       │
//! │                                   fetch_catalog ▼                       │
//! │                              CatalogSnapshot { products, categories }   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//! - [`config`] - Base URL and user agent (file + environment)
//! - [`client`] - Provider trait, HTTP client, concurrent fetch
//! - [`memory`] - In-memory provider
//! - [`error`] - Error types

pub mod client;
pub mod config;
pub mod error;
pub mod memory;

pub use client::{fetch_catalog, CatalogProvider, CatalogSnapshot, HttpCatalogClient};
pub use config::{ApiSettings, CatalogConfig, DEFAULT_BASE_URL};
pub use error::{CatalogError, CatalogResult};
pub use memory::StaticCatalog;
