//! CarShop - terminal storefront.
//!
//! Opens `carshop.db` in the working directory, creating and seeding it on
//! first run, then hands the terminal to the interactive shell.
//!
//! # Architecture
//!
//! - `SQLite` via `sqlx`, one connection
//! - Argon2id password hashes
//! - `dialoguer` prompts for every screen
//!
//! Logs go to stderr so they do not interleave with the prompts.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::process::ExitCode;

use carshop_storefront::config::StorefrontConfig;
use carshop_storefront::shell::{Shell, terminal};
use carshop_storefront::state::AppState;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let config = StorefrontConfig::default();

    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| config.log_filter.as_str().into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let state = match AppState::open(config).await {
        Ok(state) => state,
        Err(e) => {
            tracing::error!(error = %e, "Failed to open database");
            return ExitCode::FAILURE;
        }
    };
    tracing::info!(path = %state.config().database_path.display(), "Database ready");

    let mut shell = Shell::new(state);
    let result = terminal::run(&mut shell).await;
    shell.shutdown().await;

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Terminal error");
            ExitCode::FAILURE
        }
    }
}
