//! # Storefront Entry Point
//!
//! ```text
//! $ storefront
//! == Storefront | Home ==  Cart (0)
//! Loading…
//! >
//! Catalog loaded: 20 products.
//! ```
//!
//! Logs go to stderr (`RUST_LOG` to adjust), screens to stdout.

use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    match storefront_app::run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("storefront: {}", e.message);
            ExitCode::FAILURE
        }
    }
}
