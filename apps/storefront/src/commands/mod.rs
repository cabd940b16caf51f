//! # Commands Module
//!
//! Everything the shell can ask of the session.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs       ◄─── You are here (exports)
//! ├── catalog.rs   ◄─── Product list, categories, filter, detail
//! ├── cart.rs      ◄─── Cart manipulation
//! └── checkout.rs  ◄─── Buy / order confirmation
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  shell line "add 1"                                                     │
//! │         │  ShellCommand::parse                                          │
//! │         ▼                                                               │
//! │  commands::cart::add_to_cart(                                           │
//! │      catalog: &CatalogState,    ◄── only the state it needs            │
//! │      cart: &mut CartSession,                                            │
//! │      product_id: &str,          ◄── raw argument                       │
//! │  ) -> AppResult<CartResponse>                                           │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  screens render the response as text                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod cart;
pub mod catalog;
pub mod checkout;
