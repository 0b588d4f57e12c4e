//! Contact message repository.

use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};

use carshop_core::{MessageId, UserId, Username};

use super::{RepositoryError, format_timestamp, parse_timestamp};
use crate::models::{Message, MessageEntry};

#[derive(Debug, FromRow)]
struct MessageRow {
    id: MessageId,
    user_id: UserId,
    message: String,
    timestamp: String,
}

#[derive(Debug, FromRow)]
struct MessageEntryRow {
    id: MessageId,
    username: String,
    message: String,
    timestamp: String,
}

/// Repository for contact messages.
pub struct MessageRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> MessageRepository<'a> {
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Store a message.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(
        &self,
        user_id: UserId,
        body: &str,
        at: DateTime<Utc>,
    ) -> Result<Message, RepositoryError> {
        let row = sqlx::query_as::<_, MessageRow>(
            r"
            INSERT INTO messages (user_id, message, timestamp)
            VALUES (?, ?, ?)
            RETURNING id, user_id, message, timestamp
            ",
        )
        .bind(user_id)
        .bind(body)
        .bind(format_timestamp(at))
        .fetch_one(self.pool)
        .await?;

        Ok(Message {
            id: row.id,
            user_id: row.user_id,
            body: row.message,
            created_at: parse_timestamp(&row.timestamp)?,
        })
    }

    /// Every message with its sender's username, in insertion order.
    ///
    /// A message whose sender row is missing is reported as corruption:
    /// users are never deleted.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` for orphaned messages.
    pub async fn list_all(&self) -> Result<Vec<MessageEntry>, RepositoryError> {
        let rows = sqlx::query_as::<_, MessageEntryRow>(
            r"
            SELECT m.id, COALESCE(u.username, '') AS username, m.message, m.timestamp
            FROM messages m
            LEFT JOIN users u ON u.id = m.user_id
            ORDER BY m.id ASC
            ",
        )
        .fetch_all(self.pool)
        .await?;

        rows.into_iter()
            .map(|row| {
                let sender = Username::parse(&row.username).map_err(|_| {
                    RepositoryError::DataCorruption(format!(
                        "message {} has no valid sender",
                        row.id
                    ))
                })?;

                Ok(MessageEntry {
                    id: row.id,
                    sender,
                    body: row.message,
                    created_at: parse_timestamp(&row.timestamp)?,
                })
            })
            .collect()
    }

    /// Count all messages.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn count(&self) -> Result<i64, RepositoryError> {
        let count = sqlx::query_scalar("SELECT COUNT(*) FROM messages")
            .fetch_one(self.pool)
            .await?;
        Ok(count)
    }
}
