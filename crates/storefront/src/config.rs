//! Storefront configuration.
//!
//! The `carshop` binary runs with [`StorefrontConfig::default`]: the database
//! is always `carshop.db` in the working directory and there is no config file.
//! Operator tooling may point at another file with
//! [`StorefrontConfig::with_database_path`].
//!
//! # Environment Variables
//!
//! ## Optional
//! - `RUST_LOG` - Log filter (default: `carshop=info,carshop_storefront=info`)

use std::path::{Path, PathBuf};

use carshop_core::CurrencyCode;
use thiserror::Error;

/// Fixed relative name of the database file.
pub const DEFAULT_DATABASE_PATH: &str = "carshop.db";

/// Log filter used when `RUST_LOG` is unset.
///
/// `carshop` is the binary's own target; `carshop_storefront` covers the library.
pub const DEFAULT_LOG_FILTER: &str = "carshop=info,carshop_storefront=info";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Database path cannot be empty")]
    EmptyDatabasePath,
    #[error("Database path {0} is a directory")]
    DatabasePathIsDirectory(PathBuf),
}

/// Whether the ordering service checks a car's availability flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderPolicy {
    /// Reject `buy` on unavailable cars and `preorder` where not allowed.
    #[default]
    Enforce,
    /// Record any order for an existing car; flags only gate the menu.
    Permissive,
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// `SQLite` database file
    pub database_path: PathBuf,
    /// Currency for car prices
    pub currency: CurrencyCode,
    /// Server-side availability checks for orders
    pub order_policy: OrderPolicy,
    /// Default `tracing` filter directive
    pub log_filter: String,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            database_path: PathBuf::from(DEFAULT_DATABASE_PATH),
            currency: CurrencyCode::USD,
            order_policy: OrderPolicy::Enforce,
            log_filter: DEFAULT_LOG_FILTER.to_owned(),
        }
    }
}

impl StorefrontConfig {
    /// Default configuration with a different database file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the path is empty or names a directory.
    pub fn with_database_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Err(ConfigError::EmptyDatabasePath);
        }
        if path.is_dir() {
            return Err(ConfigError::DatabasePathIsDirectory(path.to_path_buf()));
        }

        Ok(Self {
            database_path: path.to_path_buf(),
            ..Self::default()
        })
    }

    /// Same configuration with a different order policy.
    #[must_use]
    pub fn with_order_policy(mut self, order_policy: OrderPolicy) -> Self {
        self.order_policy = order_policy;
        self
    }
}
