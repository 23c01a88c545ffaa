//! Database integration for seeding sample data.
//!
//! The [`Seeder`] owns the connection for one run and offers two insert
//! strategies: [`Seeder::seed_if_empty`] for a single bulk insert guarded by
//! a row count, and [`Seeder::seed_all`] for one insert per record.

mod record;
mod seeder;

pub use record::{SeedRecord, SqlValue, count_statement, insert_statement, quote_ident};
pub use seeder::{SeedError, SeedOutcome, Seeder};
