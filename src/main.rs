//! storefront - a terminal browser for a remote product catalog
//!
//! This is the binary entry point. All logic lives in the library crates.

use clap::Parser;

use storefront_api::{CatalogClient, DEFAULT_BASE_URL};
use storefront_core::prelude::*;

/// A terminal browser for a remote product catalog
#[derive(Parser, Debug)]
#[command(name = "storefront")]
#[command(about = "Browse a remote product catalog from the terminal", long_about = None)]
struct Args {
    /// Base URL of the catalog API
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    // Logs go to a file; the TUI owns the terminal
    storefront_core::logging::init()?;

    let client = CatalogClient::new(&args.base_url)?;
    info!("Using catalog at {}", client.base_url());

    storefront_tui::run(client).await?;
    Ok(())
}
