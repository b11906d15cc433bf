//! # storefront-cli: Interactive Store Menu
//!
//! Text front end over `storefront-core`.
//!
//! ## Application Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Storefront CLI                                  │
//! │                                                                         │
//! │  main.rs ────► parses CliArgs, calls run()                              │
//! │                                                                         │
//! │  lib.rs ─────► tracing, config, catalog, session                        │
//! │                                                                         │
//! │  config.rs ──► CliArgs / AppConfig / catalog loading                    │
//! │  input.rs ───► menu numbers and order lines                             │
//! │  session.rs ─► menu loop over stdin/stdout                              │
//! │  error.rs ───► CliError + ErrorCode                                     │
//! │                                 │                                       │
//! │                                 ▼                                       │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                      storefront-core                             │  │
//! │  │  CatalogConfig ──► Store ──► checkout                            │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod error;
pub mod input;
pub mod session;

use std::io;

use tracing::info;
use tracing_subscriber::EnvFilter;

pub use config::{AppConfig, CatalogSource, CliArgs};
pub use error::{CliError, ErrorCode};
pub use session::Session;

/// Runs the application.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  1. Initialize Logging                                                  │
/// │     • tracing-subscriber with env filter, written to stderr             │
/// │     • Default: warn + info for storefront crates, RUST_LOG overrides    │
/// │                                                                         │
/// │  2. Resolve Configuration (flags, STOREFRONT_* env, defaults)           │
/// │                                                                         │
/// │  3. Load Catalog and Build Store                                        │
/// │                                                                         │
/// │  4. Run the Menu Session on stdin/stdout                                │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run(args: CliArgs) -> Result<(), CliError> {
    init_tracing();

    let config = AppConfig::from(args);
    let store = config.load_catalog()?.build()?;

    info!(
        store_name = %config.store_name,
        products = store.len(),
        catalog = %config.catalog,
        atomic_checkout = config.atomic_checkout,
        "Starting storefront"
    );

    let stdin = io::stdin();
    let mut session = Session::new(store, &config, stdin.lock(), io::stdout());
    session.run()
}

/// Initializes the tracing subscriber.
///
/// Logs go to stderr so the menu on stdout stays readable.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,storefront_core=info,storefront_cli=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
