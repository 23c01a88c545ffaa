//! Table mapping for seedable records.

use sqlx::Postgres;
use sqlx::postgres::PgArguments;
use sqlx::query::Query;
use sqlx::query_builder::Separated;

use super::SeedError;

/// A single column value ready for binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlValue {
    Text(String),
    NullableText(Option<String>),
    Int(i32),
    BigInt(i64),
}

/// A record that maps onto one row of a fixed table.
///
/// `values` must yield one entry per column in `COLUMNS`, in the same order.
pub trait SeedRecord {
    /// Unquoted table name.
    const TABLE: &'static str;
    /// Unquoted column names, in binding order.
    const COLUMNS: &'static [&'static str];

    /// Returns the row's column values in `COLUMNS` order.
    fn values(&self) -> Result<Vec<SqlValue>, SeedError>;
}

/// Double-quotes an identifier so mixed-case names survive case folding.
pub fn quote_ident(ident: &str) -> String {
    format!("\"{}\"", ident.replace('"', "\"\""))
}

/// Returns `"table" ("col1", "col2", ...)` for an insert target.
pub fn insert_target<R: SeedRecord>() -> String {
    let columns: Vec<String> = R::COLUMNS.iter().map(|c| quote_ident(c)).collect();
    format!("{} ({})", quote_ident(R::TABLE), columns.join(", "))
}

/// Returns a single-row insert with positional `$n` placeholders.
pub fn insert_statement<R: SeedRecord>() -> String {
    let placeholders: Vec<String> = (1..=R::COLUMNS.len()).map(|i| format!("${i}")).collect();
    format!(
        "INSERT INTO {} VALUES ({})",
        insert_target::<R>(),
        placeholders.join(", ")
    )
}

/// Returns the row-count query for a record's table.
pub fn count_statement<R: SeedRecord>() -> String {
    format!("SELECT COUNT(*) FROM {}", quote_ident(R::TABLE))
}

/// Collects a record's values, checking them against the declared columns.
pub(crate) fn row_values<R: SeedRecord>(record: &R) -> Result<Vec<SqlValue>, SeedError> {
    let values = record.values()?;
    if values.len() != R::COLUMNS.len() {
        return Err(SeedError::ColumnMismatch {
            table: R::TABLE,
            expected: R::COLUMNS.len(),
            actual: values.len(),
        });
    }
    Ok(values)
}

pub(crate) fn bind_value<'q>(
    query: Query<'q, Postgres, PgArguments>,
    value: SqlValue,
) -> Query<'q, Postgres, PgArguments> {
    match value {
        SqlValue::Text(v) => query.bind(v),
        SqlValue::NullableText(v) => query.bind(v),
        SqlValue::Int(v) => query.bind(v),
        SqlValue::BigInt(v) => query.bind(v),
    }
}

pub(crate) fn push_value(row: &mut Separated<'_, '_, Postgres, &'static str>, value: SqlValue) {
    match value {
        SqlValue::Text(v) => row.push_bind(v),
        SqlValue::NullableText(v) => row.push_bind(v),
        SqlValue::Int(v) => row.push_bind(v),
        SqlValue::BigInt(v) => row.push_bind(v),
    };
}
