//! Seeds the sample bank accounts, skipping when the table already has rows.
//!
//! Run with:
//! ```
//! DATABASE_URL=postgres://... cargo run -p seed-data --bin seed-bank-accounts
//! ```
//!
//! Exits with status 1 on any failure.

use std::process::ExitCode;

use anyhow::Context;
use seed_data::config::SeedConfig;
use seed_data::db::{SeedOutcome, Seeder};
use seed_data::seeds::bank_accounts;

async fn run() -> anyhow::Result<SeedOutcome> {
    let config = SeedConfig::from_env()?;
    let seeder = Seeder::connect(&config)
        .await
        .context("connecting to database")?;

    let outcome = bank_accounts::seed(&seeder).await?;
    seeder.close().await;

    Ok(outcome)
}

#[tokio::main]
async fn main() -> ExitCode {
    seed_data::logging::init();

    match run().await {
        Ok(outcome) => {
            tracing::info!("  Bank accounts inserted: {}", outcome.rows_inserted());
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("Error seeding bank accounts: {e:#}");
            ExitCode::FAILURE
        }
    }
}
