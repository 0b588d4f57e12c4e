//! User repository for database operations.
//!
//! This module provides database access for accounts and their password hashes.

use sqlx::{FromRow, SqlitePool};

use carshop_core::{Role, UserId, Username};

use super::RepositoryError;
use crate::models::User;

/// Row shape of `users` without the password column.
#[derive(Debug, FromRow)]
struct UserRow {
    id: UserId,
    username: String,
    role: String,
}

impl TryFrom<UserRow> for User {
    type Error = RepositoryError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let username = Username::parse(&row.username).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid username in database: {e}"))
        })?;
        let role = row
            .role
            .parse::<Role>()
            .map_err(RepositoryError::DataCorruption)?;

        Ok(Self {
            id: row.id,
            username,
            role,
        })
    }
}

/// Row shape used for login: user columns plus the stored hash as raw bytes.
///
/// Older databases may hold the hash as a BLOB or as NULL.
#[derive(Debug, FromRow)]
struct CredentialRow {
    #[sqlx(flatten)]
    user: UserRow,
    password: Option<Vec<u8>>,
}

/// Repository for user database operations.
pub struct UserRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> UserRepository<'a> {
    /// Create a new user repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a new user with a password hash and role.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the username already exists.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn create(
        &self,
        username: &Username,
        password_hash: &str,
        role: Role,
    ) -> Result<User, RepositoryError> {
        let row = sqlx::query_as::<_, UserRow>(
            r"
            INSERT INTO users (username, password, role)
            VALUES (?, ?, ?)
            RETURNING id, username, role
            ",
        )
        .bind(username.as_str())
        .bind(password_hash)
        .bind(role.as_str())
        .fetch_one(self.pool)
        .await
        .map_err(|e| RepositoryError::from_insert(e, "username"))?;

        User::try_from(row)
    }

    /// Get a user and their stored password hash by username.
    ///
    /// Returns `None` if the user doesn't exist. A stored hash that is NULL or
    /// not UTF-8 comes back as an empty string, which never verifies.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_password_hash(
        &self,
        username: &str,
    ) -> Result<Option<(User, String)>, RepositoryError> {
        let row = sqlx::query_as::<_, CredentialRow>(
            r"
            SELECT id, username, role, CAST(password AS BLOB) AS password
            FROM users
            WHERE username = ?
            ",
        )
        .bind(username)
        .fetch_optional(self.pool)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let user = User::try_from(row.user)?;
        let hash = row
            .password
            .and_then(|bytes| String::from_utf8(bytes).ok())
            .unwrap_or_default();
        Ok(Some((user, hash)))
    }

    /// Count all users.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn count(&self) -> Result<i64, RepositoryError> {
        let count = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(self.pool)
            .await?;
        Ok(count)
    }
}
