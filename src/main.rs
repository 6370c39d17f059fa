//! Reversion Screener
//!
//! Mean-reversion screener for large-cap US equities.

use anyhow::Result;

use screener::adapters::cli;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (PORT, RUST_LOG)
    dotenvy::dotenv().ok();

    let app = cli::init();
    cli::execute(app).await
}
