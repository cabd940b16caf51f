//! # State Module
//!
//! Session state, split by concern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────┐  ┌──────────────────┐  ┌──────────────────────┐  │
//! │  │  CatalogState    │  │   CartSession    │  │    ConfigState       │  │
//! │  │                  │  │                  │  │                      │  │
//! │  │  Loading/Loaded  │  │  CartStore +     │  │  store_name          │  │
//! │  │  category filter │  │  log subscriber  │  │  currency_symbol     │  │
//! │  └──────────────────┘  └──────────────────┘  └──────────────────────┘  │
//! │                                                                         │
//! │  Each command borrows only the state it needs.                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;
mod catalog;
mod config;

pub use cart::CartSession;
pub use catalog::{CatalogState, CatalogStatus};
pub use config::ConfigState;
