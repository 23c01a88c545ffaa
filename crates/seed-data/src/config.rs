//! Configuration for seeding runs.

use std::time::Duration;

use crate::db::SeedError;

/// Environment variable holding the connection string.
pub const DATABASE_URL_VAR: &str = "DATABASE_URL";

/// Configuration for a seeding run.
#[derive(Debug, Clone)]
pub struct SeedConfig {
    /// PostgreSQL connection string.
    pub database_url: String,

    /// Maximum connections held by the seeder's pool.
    pub max_connections: u32,

    /// How long to wait for a connection before giving up.
    pub acquire_timeout: Duration,
}

impl SeedConfig {
    /// Creates a config for the given connection string, holding a single connection.
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            max_connections: 1,
            acquire_timeout: Duration::from_secs(30),
        }
    }

    /// Sets how long to wait for a connection.
    pub fn with_acquire_timeout(mut self, timeout: Duration) -> Self {
        self.acquire_timeout = timeout;
        self
    }

    /// Reads the config from `DATABASE_URL`.
    pub fn from_env() -> Result<Self, SeedError> {
        Self::from_var(std::env::var(DATABASE_URL_VAR).ok())
    }

    fn from_var(value: Option<String>) -> Result<Self, SeedError> {
        match value {
            Some(url) if !url.trim().is_empty() => Ok(Self::new(url)),
            Some(_) => Err(SeedError::Config(format!("{DATABASE_URL_VAR} is empty"))),
            None => Err(SeedError::Config(format!("{DATABASE_URL_VAR} is not set"))),
        }
    }
}
