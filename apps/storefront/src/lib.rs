//! # Storefront App Library
//!
//! Terminal presentation layer for the storefront.
//!
//! ## Module Organization
//! ```text
//! storefront_app/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── session.rs      ◄─── Session state + command dispatch
//! ├── shell.rs        ◄─── Input parsing and event loop
//! ├── screens.rs      ◄─── Text rendering of each screen
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── catalog.rs  ◄─── Catalog load status + category filter
//! │   ├── cart.rs     ◄─── Cart store wrapper
//! │   └── config.rs   ◄─── Display configuration
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── catalog.rs  ◄─── Product list/detail commands
//! │   ├── cart.rs     ◄─── Cart manipulation commands
//! │   └── checkout.rs ◄─── Buy / order confirmation
//! └── error.rs        ◄─── Error type for commands
//! ```

pub mod commands;
pub mod error;
pub mod screens;
pub mod session;
pub mod shell;
pub mod state;

use storefront_catalog::{CatalogConfig, HttpCatalogClient};
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::EnvFilter;

use error::{AppError, AppResult};
use session::Session;
use state::ConfigState;

/// Log filter used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "info,storefront=debug,reqwest=warn,hyper=warn";

/// Runs the storefront on stdin/stdout.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, written to stderr             │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • ConfigState from STOREFRONT_* variables                           │
/// │     • CatalogConfig from catalog.toml + environment                     │
/// │                                                                         │
/// │  3. Build Catalog Client ─────────────────────────────────────────────► │
/// │                                                                         │
/// │  4. Run Shell ────────────────────────────────────────────────────────► │
/// │     • Catalog fetched once in the background                            │
/// │     • Commands read line by line                                        │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub async fn run() -> AppResult<()> {
    init_tracing()?;

    info!(version = env!("CARGO_PKG_VERSION"), "Starting storefront");

    let config = ConfigState::from_env();
    let catalog_config = CatalogConfig::load_or_default(None);
    info!(base_url = %catalog_config.api.base_url, "Using catalog service");

    let client = HttpCatalogClient::new(catalog_config)?;
    let mut session = Session::new(config);

    let input = BufReader::new(tokio::io::stdin());
    let mut output = std::io::stdout();

    shell::run_shell(&mut session, &client, input, &mut output).await
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=storefront=trace` - Show trace for storefront crates only
/// - Default: [`DEFAULT_LOG_FILTER`]
fn init_tracing() -> AppResult<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| AppError::internal(format!("Failed to initialize logging: {}", e)))
}
