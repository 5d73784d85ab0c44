//! # wrapcart Checkout
//!
//! Console front end for `wrapcart-core`.
//!
//! ## Module Organization
//! ```text
//! wrapcart_checkout/
//! ├── lib.rs      ◄─── You are here (startup & run)
//! ├── config.rs   ◄─── CheckoutConfig (defaults, TOML, env)
//! ├── prompt.rs   ◄─── Reads the order from the console
//! ├── summary.rs  ◄─── Prints the breakdown
//! └── error.rs    ◄─── CheckoutError
//! ```

pub mod config;
pub mod error;
pub mod prompt;
pub mod summary;

use std::io::{self, Write};

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;
use wrapcart_core::PricingEngine;

use crate::config::{CheckoutConfig, OutputFormat};

/// Runs one checkout against stdin/stdout.
///
/// ## Startup Sequence
/// 1. Initialize logging (stderr, `RUST_LOG` override)
/// 2. Load configuration and build the pricing engine
/// 3. Prompt for each product
/// 4. Price the order and print the summary
pub fn run() -> anyhow::Result<()> {
    init_tracing();

    let config = CheckoutConfig::load().context("Failed to load configuration")?;
    info!(
        products = config.pricing.catalog.len(),
        rules = config.pricing.rules.len(),
        comparison = ?config.pricing.discount_comparison,
        "Configuration loaded"
    );

    let engine = PricingEngine::new(config.pricing).context("Invalid pricing configuration")?;

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut output = stdout.lock();

    let order = prompt::read_order(engine.catalog(), &mut input, &mut output)?;
    let breakdown = engine
        .calculate_total(&order)
        .context("Could not price the order")?;

    info!(
        total_quantity = breakdown.total_quantity,
        total = %breakdown.total,
        "Order priced"
    );

    match config.output {
        OutputFormat::Text => summary::write_summary(&breakdown, &mut output)?,
        OutputFormat::Json => summary::write_json(&breakdown, &mut output)?,
    }
    output.flush()?;

    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show discount candidates and entered lines
/// - Default: `warn,wrapcart_core=info,wrapcart_checkout=info`
///
/// Logs go to stderr so the summary on stdout stays clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,wrapcart_core=info,wrapcart_checkout=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
