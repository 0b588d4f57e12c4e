//! Application state shared by the shell and the services.

use std::sync::Arc;

use sqlx::SqlitePool;

use crate::config::StorefrontConfig;
use crate::db::{self, RepositoryError};
use crate::services::{AuthService, CatalogService, MessagingService};

/// Application state.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// the database connection and configuration.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    pool: SqlitePool,
}

impl AppState {
    /// Create application state from an already initialized pool.
    #[must_use]
    pub fn new(config: StorefrontConfig, pool: SqlitePool) -> Self {
        Self {
            inner: Arc::new(AppStateInner { config, pool }),
        }
    }

    /// Open the configured database file, apply the schema and seed cars.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the file cannot be opened or initialized.
    pub async fn open(config: StorefrontConfig) -> Result<Self, RepositoryError> {
        let pool = db::open_pool(&config.database_path).await?;
        db::init(&pool).await?;
        Ok(Self::new(config, pool))
    }

    /// Open a fresh in-memory database, apply the schema and seed cars.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if `SQLite` cannot be initialized.
    pub async fn open_in_memory(config: StorefrontConfig) -> Result<Self, RepositoryError> {
        let pool = db::open_pool_in_memory().await?;
        db::init(&pool).await?;
        Ok(Self::new(config, pool))
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the database connection pool.
    #[must_use]
    pub fn pool(&self) -> &SqlitePool {
        &self.inner.pool
    }

    #[must_use]
    pub fn auth(&self) -> AuthService<'_> {
        AuthService::new(self.pool())
    }

    #[must_use]
    pub fn catalog(&self) -> CatalogService<'_> {
        CatalogService::new(self.pool(), self.config())
    }

    #[must_use]
    pub fn messaging(&self) -> MessagingService<'_> {
        MessagingService::new(self.pool())
    }

    /// Close the database connection.
    pub async fn close(&self) {
        self.inner.pool.close().await;
    }
}
