//! Car inventory queries.

use rust_decimal::Decimal;
use sqlx::{FromRow, SqlitePool};

use carshop_core::{CarId, CurrencyCode, Price};

use super::RepositoryError;
use crate::models::Car;

#[derive(Debug, FromRow)]
struct CarRow {
    id: CarId,
    model: String,
    price: f64,
    available: bool,
    preorder_allowed: bool,
}

impl CarRow {
    fn into_car(self, currency: CurrencyCode) -> Result<Car, RepositoryError> {
        let amount = Decimal::try_from(self.price)
            .map_err(|e| {
                RepositoryError::DataCorruption(format!("invalid price for car {}: {e}", self.id))
            })?
            .round_dp(2);

        let price = Price::new(amount, currency);
        if !price.is_non_negative() {
            return Err(RepositoryError::DataCorruption(format!(
                "negative price for car {}",
                self.id
            )));
        }

        Ok(Car {
            id: self.id,
            model: self.model,
            price,
            available: self.available,
            preorder_allowed: self.preorder_allowed,
        })
    }
}

/// Read-only access to the `cars` table.
pub struct CarRepository<'a> {
    pool: &'a SqlitePool,
    currency: CurrencyCode,
}

impl<'a> CarRepository<'a> {
    #[must_use]
    pub const fn new(pool: &'a SqlitePool, currency: CurrencyCode) -> Self {
        Self { pool, currency }
    }

    /// All cars in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if a price cannot be represented.
    pub async fn list(&self) -> Result<Vec<Car>, RepositoryError> {
        let rows = sqlx::query_as::<_, CarRow>(
            r"
            SELECT id, model, price, available, preorder_allowed
            FROM cars
            ORDER BY id ASC
            ",
        )
        .fetch_all(self.pool)
        .await?;

        rows.into_iter()
            .map(|row| row.into_car(self.currency))
            .collect()
    }

    /// Get a car by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(&self, id: CarId) -> Result<Option<Car>, RepositoryError> {
        let row = sqlx::query_as::<_, CarRow>(
            r"
            SELECT id, model, price, available, preorder_allowed
            FROM cars
            WHERE id = ?
            ",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        row.map(|r| r.into_car(self.currency)).transpose()
    }
}
