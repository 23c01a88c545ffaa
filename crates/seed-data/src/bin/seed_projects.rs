//! Seeds the sample crowdfunding projects.
//!
//! Run with:
//! ```
//! DATABASE_URL=postgres://... cargo run -p seed-data --bin seed-projects
//! ```
//!
//! Every run appends another copy of the projects. Failures are logged and
//! the process still exits 0 once the connection is closed.

use anyhow::Context;
use seed_data::config::SeedConfig;
use seed_data::db::Seeder;
use seed_data::seeds::projects;

async fn connect() -> anyhow::Result<Seeder> {
    let config = SeedConfig::from_env()?;
    let seeder = Seeder::connect(&config)
        .await
        .context("connecting to database")?;
    Ok(seeder)
}

#[tokio::main]
async fn main() {
    seed_data::logging::init();

    let seeder = match connect().await {
        Ok(seeder) => seeder,
        Err(e) => {
            tracing::error!("Error seeding database: {e:#}");
            return;
        }
    };

    match projects::seed(&seeder).await {
        Ok(inserted) => tracing::info!("  Projects inserted: {inserted}"),
        Err(e) => tracing::error!(
            inserted = e.rows_inserted(),
            "Error seeding database: {e}"
        ),
    }

    seeder.close().await;
}
