//! # Bodega Console Entry Point
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       Application Startup                           │
//! │                                                                     │
//! │  1. Initialize Logging ───────────────────────────────────────────► │
//! │     • tracing-subscriber with env filter, writing to stderr         │
//! │     • Default: INFO (bodega at DEBUG), override with RUST_LOG       │
//! │                                                                     │
//! │  2. Load Configuration ───────────────────────────────────────────► │
//! │     • Defaults + BODEGA_* environment overrides                     │
//! │                                                                     │
//! │  3. Build Catalog ────────────────────────────────────────────────► │
//! │     • Static product list, validated at construction                │
//! │                                                                     │
//! │  4. Run Menu Loop ────────────────────────────────────────────────► │
//! │     • One explicitly-constructed cart per session                   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

mod catalog;
mod config;
mod menu;

use bodega_core::Cart;
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::ConsoleConfig;

fn main() {
    init_tracing();

    if let Err(err) = run() {
        eprintln!("bodega: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    info!("Starting Bodega console");

    let config = ConsoleConfig::from_env();
    let catalog = catalog::default_catalog()?;
    info!(
        store = %config.store_name,
        products = catalog.len(),
        "catalog loaded"
    );

    // One cart per shopping session, passed explicitly - no global state
    let mut cart = Cart::new();
    menu::run(&config, &catalog, &mut cart)?;

    info!("Session ended");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages for everything
/// - `RUST_LOG=bodega=trace` - Trace for bodega crates only
/// - Default: INFO, with bodega crates at DEBUG
///
/// Logs go to stderr so they never interleave with the menu on stdout.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,bodega=debug,bodega_core=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
