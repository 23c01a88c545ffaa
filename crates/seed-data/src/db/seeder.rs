//! Database seeding utilities.

use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Postgres, QueryBuilder};
use thiserror::Error;
use tracing::{debug, error, info};

use super::record::{
    SeedRecord, bind_value, count_statement, insert_statement, insert_target, push_value,
    row_values,
};
use crate::config::SeedConfig;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Invalid record: {0}")]
    InvalidRecord(String),
    #[error("Table {table} expects {expected} values per row, got {actual}")]
    ColumnMismatch {
        table: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("Seeding aborted after {inserted} rows: {source}")]
    Aborted {
        inserted: usize,
        source: Box<SeedError>,
    },
}

impl SeedError {
    /// Number of rows written before the failure, when known.
    pub fn rows_inserted(&self) -> usize {
        match self {
            SeedError::Aborted { inserted, .. } => *inserted,
            _ => 0,
        }
    }
}

/// Result of an existence-checked seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The table already held rows; nothing was written.
    Skipped { existing: i64 },
    /// The table was empty and every record was inserted.
    Inserted { rows: usize },
}

impl SeedOutcome {
    pub fn rows_inserted(&self) -> usize {
        match self {
            SeedOutcome::Skipped { .. } => 0,
            SeedOutcome::Inserted { rows } => *rows,
        }
    }
}

/// Database seeder owning the connection used for one seeding run.
pub struct Seeder {
    pool: PgPool,
}

impl Seeder {
    /// Creates a new seeder with the given database pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Opens the pool described by `config`.
    pub async fn connect(config: &SeedConfig) -> Result<Self, SeedError> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.acquire_timeout)
            .connect(&config.database_url)
            .await?;

        info!("Connected to database");
        Ok(Self::new(pool))
    }

    /// Returns the number of rows currently in the record's table.
    pub async fn count_rows<R: SeedRecord>(&self) -> Result<i64, SeedError> {
        let count: i64 = sqlx::query_scalar(&count_statement::<R>())
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Inserts `records` in a single statement, unless the table already has rows.
    pub async fn seed_if_empty<R: SeedRecord>(
        &self,
        records: &[R],
    ) -> Result<SeedOutcome, SeedError> {
        let existing = self.count_rows::<R>().await?;
        if existing > 0 {
            debug!(
                "Table {} already has {} rows, skipping seed",
                R::TABLE,
                existing
            );
            return Ok(SeedOutcome::Skipped { existing });
        }

        if records.is_empty() {
            info!("No records to seed into {}", R::TABLE);
            return Ok(SeedOutcome::Inserted { rows: 0 });
        }

        let rows = records
            .iter()
            .map(row_values)
            .collect::<Result<Vec<_>, _>>()?;

        info!("Seeding {} rows into {}...", rows.len(), R::TABLE);

        let mut builder =
            QueryBuilder::<Postgres>::new(format!("INSERT INTO {} ", insert_target::<R>()));
        builder.push_values(rows, |mut row, values| {
            for value in values {
                push_value(&mut row, value);
            }
        });
        let result = builder.build().execute(&self.pool).await?;

        info!("Seeded {} rows into {}", result.rows_affected(), R::TABLE);
        Ok(SeedOutcome::Inserted {
            rows: records.len(),
        })
    }

    /// Inserts every record with its own statement, without checking existing rows.
    ///
    /// Stops at the first failing insert; rows written before it stay in place.
    pub async fn seed_all<R: SeedRecord>(&self, records: &[R]) -> Result<usize, SeedError> {
        info!("Seeding {} rows into {}...", records.len(), R::TABLE);

        let sql = insert_statement::<R>();
        let mut inserted = 0;

        for record in records {
            if let Err(source) = self.insert_one(&sql, record).await {
                error!(
                    "Insert into {} failed after {} rows: {}",
                    R::TABLE,
                    inserted,
                    source
                );
                return Err(SeedError::Aborted {
                    inserted,
                    source: Box::new(source),
                });
            }
            inserted += 1;
        }

        info!("Seeded {} rows into {}", inserted, R::TABLE);
        Ok(inserted)
    }

    async fn insert_one<R: SeedRecord>(&self, sql: &str, record: &R) -> Result<(), SeedError> {
        let values = row_values(record)?;
        let query = values
            .into_iter()
            .fold(sqlx::query::<Postgres>(sql), bind_value);
        query.execute(&self.pool).await?;
        Ok(())
    }

    /// Closes the pool, waiting for its connection to be released.
    pub async fn close(self) {
        self.pool.close().await;
        info!("Database connection closed");
    }

    /// Returns a reference to the pool for advanced usage.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}
