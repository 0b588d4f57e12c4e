//! Unified error handling for the front-end.
//!
//! Provides a unified `AppError` type that every shell action reports through.
//! [`AppError::kind`] classifies errors so callers can react without matching
//! on every service variant, and [`AppError::user_message`] gives the text
//! shown in the notification.

use thiserror::Error;

use crate::db::RepositoryError;
use crate::services::{AuthError, MessageError, OrderError};

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Database operation failed.
    #[error("Database error: {0}")]
    Database(#[from] RepositoryError),

    /// Registration or login failed.
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// Order placement failed.
    #[error("Order error: {0}")]
    Order(#[from] OrderError),

    /// Sending or listing messages failed.
    #[error("Message error: {0}")]
    Message(#[from] MessageError),

    /// Action requires a logged-in user.
    #[error("Not logged in")]
    NotLoggedIn,
}

/// Coarse classification of an [`AppError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Missing or mismatched input; the user can correct it.
    Validation,
    /// Username already taken.
    Conflict,
    /// Bad credentials or no session.
    Auth,
    /// Role does not allow the action.
    Forbidden,
    /// Referenced entity does not exist.
    NotFound,
    /// Car flags do not allow the order type.
    Unavailable,
    /// Storage failure; the action was aborted.
    Store,
}

impl AppError {
    /// Classify the error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Database(_)
            | Self::Auth(AuthError::Repository(_) | AuthError::PasswordHash)
            | Self::Order(OrderError::Repository(_))
            | Self::Message(MessageError::Repository(_)) => ErrorKind::Store,
            Self::Auth(AuthError::Validation(_)) | Self::Message(MessageError::Validation(_)) => {
                ErrorKind::Validation
            }
            Self::Auth(AuthError::UserAlreadyExists) => ErrorKind::Conflict,
            Self::Auth(AuthError::InvalidCredentials) | Self::NotLoggedIn => ErrorKind::Auth,
            Self::Message(MessageError::Forbidden) => ErrorKind::Forbidden,
            Self::Order(OrderError::CarNotFound(_)) => ErrorKind::NotFound,
            Self::Order(OrderError::NotAvailable(_) | OrderError::PreorderNotAllowed(_)) => {
                ErrorKind::Unavailable
            }
        }
    }

    /// Text for the notification shown to the user.
    ///
    /// Storage details are never shown, and unknown usernames read the same
    /// as wrong passwords.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Auth(AuthError::Validation(msg)) | Self::Message(MessageError::Validation(msg)) => {
                msg.clone()
            }
            Self::Auth(AuthError::UserAlreadyExists) => "Username already exists.".to_owned(),
            Self::Auth(AuthError::InvalidCredentials) => {
                "Invalid username or password.".to_owned()
            }
            Self::NotLoggedIn => "Please log in first.".to_owned(),
            Self::Message(MessageError::Forbidden) => {
                "Only administrators can view messages.".to_owned()
            }
            Self::Order(OrderError::CarNotFound(_)) => "That car no longer exists.".to_owned(),
            Self::Order(OrderError::NotAvailable(model)) => {
                format!("{model} is not available to buy right now.")
            }
            Self::Order(OrderError::PreorderNotAllowed(model)) => {
                format!("{model} cannot be preordered.")
            }
            _ => "Something went wrong. Please try again.".to_owned(),
        }
    }

    /// Log storage failures at error level; other kinds are expected.
    pub fn log(&self) {
        if self.kind() == ErrorKind::Store {
            tracing::error!(error = %self, "Action failed");
        } else {
            tracing::debug!(error = %self, kind = ?self.kind(), "Action rejected");
        }
    }
}
