//! Subcommand implementations.

pub mod admin;
pub mod db;
pub mod list;

use std::path::Path;

use carshop_storefront::config::StorefrontConfig;
use carshop_storefront::state::AppState;

/// Open (and initialize if needed) the database at `path`.
async fn open(path: &Path) -> Result<AppState, Box<dyn std::error::Error>> {
    let config = StorefrontConfig::with_database_path(path)?;
    tracing::debug!(path = %path.display(), "Opening database");
    Ok(AppState::open(config).await?)
}
