//! Sample data seeding for Libertas Alpha.
//!
//! This crate inserts the demo bank accounts and crowdfunding projects used
//! by development and staging databases. Each table has its own binary:
//!
//! - `seed-bank-accounts` inserts the accounts once, skipping when the table has rows
//! - `seed-projects` appends the sample projects on every run
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use seed_data::prelude::*;
//!
//! let seeder = Seeder::connect(&SeedConfig::from_env()?).await?;
//! let outcome = seed_data::seeds::bank_accounts::seed(&seeder).await?;
//! seeder.close().await;
//! ```

pub mod config;
pub mod db;
pub mod logging;
pub mod models;
pub mod seeds;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::config::SeedConfig;
    pub use crate::db::{SeedError, SeedOutcome, SeedRecord, Seeder};
    pub use crate::models::{BankAccount, Project, ProjectDetails, ProjectStatus, TokenAddress};
}
