//! Integration tests for CarShop.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p carshop-integration-tests
//! ```
//!
//! Every test opens its own in-memory `SQLite` database, or a file in a
//! temporary directory when persistence across reopen is under test. Nothing
//! needs to be running beforehand.
//!
//! # Test Categories
//!
//! - `accounts` - registration, login, roles
//! - `ordering` - catalog listing and order placement
//! - `messaging` - contact messages and the admin list
//! - `persistence` - schema init, seeding and reopen
//! - `shell` - full screen flows through the state machine

#![allow(clippy::unwrap_used, clippy::missing_panics_doc)]

use secrecy::SecretString;

use carshop_storefront::config::{OrderPolicy, StorefrontConfig};
use carshop_storefront::models::Session;
use carshop_storefront::services::RegisterRequest;
use carshop_storefront::state::AppState;

/// Test password used by [`register`].
pub const PASSWORD: &str = "correct horse";

#[must_use]
pub fn secret(value: &str) -> SecretString {
    SecretString::from(value.to_owned())
}

/// A registration form with matching passwords.
#[must_use]
pub fn register_request(username: &str, password: &str, wants_admin: bool) -> RegisterRequest {
    RegisterRequest {
        username: username.to_owned(),
        password: secret(password),
        confirm_password: secret(password),
        wants_admin,
    }
}

/// Fresh in-memory store with the default configuration.
pub async fn memory_state() -> AppState {
    AppState::open_in_memory(StorefrontConfig::default())
        .await
        .unwrap()
}

/// Fresh in-memory store with the given order policy.
pub async fn memory_state_with(policy: OrderPolicy) -> AppState {
    AppState::open_in_memory(StorefrontConfig::default().with_order_policy(policy))
        .await
        .unwrap()
}

/// Register `username` with [`PASSWORD`] and log in.
pub async fn register(state: &AppState, username: &str, wants_admin: bool) -> Session {
    let auth = state.auth();
    auth.register(&register_request(username, PASSWORD, wants_admin))
        .await
        .unwrap();
    auth.login(username, &secret(PASSWORD)).await.unwrap()
}
