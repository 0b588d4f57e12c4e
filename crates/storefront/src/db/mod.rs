//! Database operations for the storefront `SQLite` file.
//!
//! # Database: `carshop.db`
//!
//! ## Tables
//!
//! - `users` - Accounts with Argon2 password hashes and a role
//! - `cars` - Inventory, seeded on first run
//! - `orders` - Buy and preorder requests
//! - `messages` - Contact form submissions
//!
//! # Schema
//!
//! The schema lives in `crates/storefront/migrations/` and is applied by
//! [`init`] on every startup. All statements are `CREATE TABLE IF NOT EXISTS`,
//! so initialization is idempotent.

pub mod cars;
pub mod messages;
pub mod orders;
pub mod seed;
pub mod users;

use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use chrono::{DateTime, NaiveDateTime, Utc};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use thiserror::Error;
use tracing::info;

/// Format used for `orders.date` and `messages.timestamp`.
///
/// Fixed width, so lexical order in SQL matches chronological order.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// Accepts rows written with or without fractional seconds.
const TIMESTAMP_PARSE_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema could not be applied.
    #[error("schema error: {0}")]
    Schema(#[from] sqlx::migrate::MigrateError),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// Constraint violation (e.g., unique username).
    #[error("constraint violation: {0}")]
    Conflict(String),
}

impl RepositoryError {
    /// Map a unique-constraint violation to `Conflict`, anything else to `Database`.
    pub(crate) fn from_insert(err: sqlx::Error, what: &str) -> Self {
        if let sqlx::Error::Database(ref db_err) = err
            && db_err.is_unique_violation()
        {
            return Self::Conflict(format!("{what} already exists"));
        }
        Self::Database(err)
    }
}

/// Open (or create) the `SQLite` database file at `path`.
///
/// Uses a single connection: every statement runs to completion before the
/// next one starts. Foreign keys are enforced.
///
/// # Errors
///
/// Returns `RepositoryError::Database` if the file cannot be opened.
pub async fn open_pool(path: &Path) -> Result<SqlitePool, RepositoryError> {
    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true)
        .foreign_keys(true)
        .busy_timeout(Duration::from_secs(5));

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await?;

    info!(path = %path.display(), "Database opened");
    Ok(pool)
}

/// Open a private in-memory database (for tests).
///
/// # Errors
///
/// Returns `RepositoryError::Database` if `SQLite` cannot be initialized.
pub async fn open_pool_in_memory() -> Result<SqlitePool, RepositoryError> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await?;

    Ok(pool)
}

/// Create the tables if absent and seed the car inventory if it is empty.
///
/// Returns the number of cars inserted (zero when the inventory already had rows).
///
/// # Errors
///
/// Returns `RepositoryError::Schema` if the schema cannot be applied, or
/// `RepositoryError::Database` if seeding fails.
pub async fn init(pool: &SqlitePool) -> Result<u64, RepositoryError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    info!("Database schema ready");

    let seeded = seed::seed_cars(pool).await?;
    if seeded > 0 {
        info!(count = seeded, "Seeded default car inventory");
    }
    Ok(seeded)
}

/// Render a timestamp in the stored text form.
#[must_use]
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// Parse a stored timestamp.
///
/// # Errors
///
/// Returns `RepositoryError::DataCorruption` if the text is not a timestamp.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, RepositoryError> {
    NaiveDateTime::parse_from_str(raw, TIMESTAMP_PARSE_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|e| RepositoryError::DataCorruption(format!("invalid timestamp {raw:?}: {e}")))
}
