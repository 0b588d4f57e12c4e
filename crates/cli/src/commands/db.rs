//! Database commands.

use std::path::Path;

use carshop_storefront::config::StorefrontConfig;
use carshop_storefront::db;
use carshop_storefront::db::messages::MessageRepository;
use carshop_storefront::db::orders::OrderRepository;
use carshop_storefront::db::users::UserRepository;

/// Create the schema and seed the default cars.
///
/// Safe to run on an existing database; nothing is duplicated.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or initialized.
pub async fn init(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let config = StorefrontConfig::with_database_path(path)?;

    tracing::info!(path = %config.database_path.display(), "Initializing database...");
    let pool = db::open_pool(&config.database_path).await?;
    let seeded = db::init(&pool).await?;

    let users = UserRepository::new(&pool).count().await?;
    let orders = OrderRepository::new(&pool).count().await?;
    let messages = MessageRepository::new(&pool).count().await?;
    pool.close().await;

    if seeded == 0 {
        tracing::info!("Database already initialized; no cars seeded");
    } else {
        tracing::info!(seeded, "Database initialized");
    }
    tracing::info!(users, orders, messages, "Current row counts");
    Ok(())
}
