//! Admin user management commands.
//!
//! # Usage
//!
//! ```bash
//! carshop-cli admin create -u alice
//! ```
//!
//! The password is read twice from a hidden prompt.

use std::path::Path;

use dialoguer::Password;
use secrecy::SecretString;
use thiserror::Error;

use carshop_core::UserId;
use carshop_storefront::services::{AuthError, RegisterRequest};

use super::open;

/// Errors that can occur during admin operations.
#[derive(Debug, Error)]
pub enum AdminError {
    /// Terminal prompt failed.
    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    /// User already exists.
    #[error("User already exists: {0}")]
    UserExists(String),

    /// Registration rejected the input.
    #[error("{0}")]
    Auth(AuthError),
}

fn prompt_password() -> Result<String, AdminError> {
    Ok(Password::new()
        .with_prompt("Password")
        .with_confirmation("Confirm password", "Passwords do not match.")
        .interact()?)
}

/// Create a new admin user.
///
/// # Returns
///
/// The ID of the created user.
///
/// # Errors
///
/// Returns an error if the username is taken, the input is invalid or the
/// database cannot be written.
pub async fn create_user(path: &Path, username: &str) -> Result<UserId, Box<dyn std::error::Error>> {
    let password = prompt_password()?;
    let state = open(path).await?;

    tracing::info!("Creating admin user: {}", username.trim());

    let request = RegisterRequest {
        username: username.to_owned(),
        password: SecretString::from(password.clone()),
        confirm_password: SecretString::from(password),
        wants_admin: true,
    };
    let result = state.auth().register(&request).await;
    state.close().await;

    let user = result.map_err(|e| match e {
        AuthError::UserAlreadyExists => AdminError::UserExists(username.trim().to_owned()),
        other => AdminError::Auth(other),
    })?;

    tracing::info!(
        "Admin user created successfully! ID: {}, Username: {}",
        user.id,
        user.username
    );
    Ok(user.id)
}
