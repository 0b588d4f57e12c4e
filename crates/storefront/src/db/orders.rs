//! Order repository.

use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};

use carshop_core::{CarId, OrderId, OrderType, UserId, Username};

use super::{RepositoryError, format_timestamp, parse_timestamp};
use crate::models::{Order, OrderSummary};

#[derive(Debug, FromRow)]
struct OrderRow {
    id: OrderId,
    user_id: UserId,
    car_id: CarId,
    order_type: String,
    date: String,
}

impl TryFrom<OrderRow> for Order {
    type Error = RepositoryError;

    fn try_from(row: OrderRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.id,
            user_id: row.user_id,
            car_id: row.car_id,
            order_type: parse_order_type(&row.order_type)?,
            created_at: parse_timestamp(&row.date)?,
        })
    }
}

#[derive(Debug, FromRow)]
struct OrderSummaryRow {
    id: OrderId,
    username: String,
    car_id: CarId,
    model: String,
    order_type: String,
    date: String,
}

impl TryFrom<OrderSummaryRow> for OrderSummary {
    type Error = RepositoryError;

    fn try_from(row: OrderSummaryRow) -> Result<Self, Self::Error> {
        let username = Username::parse(&row.username).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid username in database: {e}"))
        })?;

        Ok(Self {
            id: row.id,
            username,
            car_id: row.car_id,
            car_model: row.model,
            order_type: parse_order_type(&row.order_type)?,
            created_at: parse_timestamp(&row.date)?,
        })
    }
}

fn parse_order_type(raw: &str) -> Result<OrderType, RepositoryError> {
    raw.parse().map_err(RepositoryError::DataCorruption)
}

/// Repository for order database operations.
pub struct OrderRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> OrderRepository<'a> {
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Record an order.
    ///
    /// The stored date is never earlier than the latest existing order, so
    /// dates stay non-decreasing even if the wall clock steps backwards.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails (including
    /// foreign key violations for unknown users or cars).
    pub async fn create(
        &self,
        user_id: UserId,
        car_id: CarId,
        order_type: OrderType,
        at: DateTime<Utc>,
    ) -> Result<Order, RepositoryError> {
        let row = sqlx::query_as::<_, OrderRow>(
            r"
            INSERT INTO orders (user_id, car_id, order_type, date)
            VALUES (?1, ?2, ?3, MAX(?4, COALESCE((SELECT MAX(date) FROM orders), ?4)))
            RETURNING id, user_id, car_id, order_type, date
            ",
        )
        .bind(user_id)
        .bind(car_id)
        .bind(order_type.as_str())
        .bind(format_timestamp(at))
        .fetch_one(self.pool)
        .await?;

        Order::try_from(row)
    }

    /// Orders placed by one user, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_for_user(&self, user_id: UserId) -> Result<Vec<OrderSummary>, RepositoryError> {
        let rows = sqlx::query_as::<_, OrderSummaryRow>(
            r"
            SELECT o.id, u.username, o.car_id, c.model, o.order_type, o.date
            FROM orders o
            JOIN users u ON u.id = o.user_id
            JOIN cars c ON c.id = o.car_id
            WHERE o.user_id = ?
            ORDER BY o.id ASC
            ",
        )
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(OrderSummary::try_from).collect()
    }

    /// Every order, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_all(&self) -> Result<Vec<OrderSummary>, RepositoryError> {
        let rows = sqlx::query_as::<_, OrderSummaryRow>(
            r"
            SELECT o.id, u.username, o.car_id, c.model, o.order_type, o.date
            FROM orders o
            JOIN users u ON u.id = o.user_id
            JOIN cars c ON c.id = o.car_id
            ORDER BY o.id ASC
            ",
        )
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(OrderSummary::try_from).collect()
    }

    /// Count all orders.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn count(&self) -> Result<i64, RepositoryError> {
        let count = sqlx::query_scalar("SELECT COUNT(*) FROM orders")
            .fetch_one(self.pool)
            .await?;
        Ok(count)
    }
}
