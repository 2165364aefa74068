//! Market extract - cleans the raw market tracker dataset down to one metro

use anyhow::{Context, Result};
use market_extract::cleaning::{self, ExtractConfig};
use tracing::info;

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_thread_ids(false)
        .with_level(true)
        .init();

    info!("Starting market extract pipeline");

    // Load configuration from environment
    dotenvy::dotenv().ok();
    let config = ExtractConfig::from_env();
    info!(
        "Target market: {} / \"{}\"",
        config.target_state_code, config.target_metro_substring
    );

    let summary = cleaning::run(&config).context("cleaning pipeline failed")?;

    info!("✓ Extract complete: {}", summary);
    info!("Saved cleaned file to: {}", summary.output_path.display());

    Ok(())
}
