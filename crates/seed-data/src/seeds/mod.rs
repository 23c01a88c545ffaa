//! Sample payloads and the seeding job for each table.
//!
//! - [`bank_accounts`]: seeded once, skipped when the table has rows
//! - [`projects`]: appended on every run

pub mod bank_accounts;
pub mod projects;
