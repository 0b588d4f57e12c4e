//! Contact messages.

use chrono::Utc;
use sqlx::SqlitePool;
use thiserror::Error;
use tracing::{info, instrument, warn};

use crate::db::RepositoryError;
use crate::db::messages::MessageRepository;
use crate::models::{Message, MessageEntry, Session};

/// Errors that can occur while sending or reading messages.
#[derive(Debug, Error)]
pub enum MessageError {
    /// Empty message body.
    #[error("{0}")]
    Validation(String),

    /// Only admins may read the message list.
    #[error("only admins can view messages")]
    Forbidden,

    /// Repository/database error.
    #[error("database error: {0}")]
    Repository(#[from] RepositoryError),
}

/// Contact form and admin message list.
pub struct MessagingService<'a> {
    messages: MessageRepository<'a>,
}

impl<'a> MessagingService<'a> {
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self {
            messages: MessageRepository::new(pool),
        }
    }

    /// Store a message from the session's user.
    ///
    /// The body is trimmed before it is stored.
    ///
    /// # Errors
    ///
    /// Returns `MessageError::Validation` if the body is empty after trimming.
    #[instrument(skip(self, session, body), fields(user_id = %session.user_id))]
    pub async fn send(&self, session: &Session, body: &str) -> Result<Message, MessageError> {
        let body = body.trim();
        if body.is_empty() {
            return Err(MessageError::Validation(
                "Please enter a message before sending.".to_owned(),
            ));
        }

        let message = self
            .messages
            .create(session.user_id, body, Utc::now())
            .await?;

        info!(message_id = %message.id, "Message sent");
        Ok(message)
    }

    /// Every message with its sender, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `MessageError::Forbidden` unless the session is an admin.
    #[instrument(skip(self, session), fields(user_id = %session.user_id))]
    pub async fn list_all(&self, session: &Session) -> Result<Vec<MessageEntry>, MessageError> {
        if !session.is_admin() {
            warn!("Non-admin tried to list messages");
            return Err(MessageError::Forbidden);
        }

        Ok(self.messages.list_all().await?)
    }

    /// Number of stored messages.
    ///
    /// # Errors
    ///
    /// Returns `MessageError::Repository` if the query fails.
    pub async fn count(&self) -> Result<i64, MessageError> {
        Ok(self.messages.count().await?)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use carshop_core::{Role, Username};

    use super::*;
    use crate::db;
    use crate::db::users::UserRepository;

    async fn setup() -> (SqlitePool, Session, Session) {
        let pool = db::open_pool_in_memory().await.unwrap();
        db::init(&pool).await.unwrap();

        let users = UserRepository::new(&pool);
        let customer = users
            .create(&Username::parse("ivy").unwrap(), "hash", Role::Customer)
            .await
            .unwrap();
        let admin = users
            .create(&Username::parse("root").unwrap(), "hash", Role::Admin)
            .await
            .unwrap();
        (pool, Session::from(customer), Session::from(admin))
    }

    #[tokio::test]
    async fn test_blank_message_is_rejected() {
        let (pool, customer, _) = setup().await;
        let messaging = MessagingService::new(&pool);

        for body in ["", "   ", "\n\t "] {
            assert!(matches!(
                messaging.send(&customer, body).await,
                Err(MessageError::Validation(_))
            ));
        }
        assert_eq!(messaging.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_send_and_list() {
        let (pool, customer, admin) = setup().await;
        let messaging = MessagingService::new(&pool);

        let sent = messaging
            .send(&customer, "  Is the Camry red?  ")
            .await
            .unwrap();
        assert_eq!(sent.body, "Is the Camry red?");
        assert_eq!(messaging.count().await.unwrap(), 1);

        let entries = messaging.list_all(&admin).await.unwrap();
        assert_eq!(entries.len(), 1);
        let entry = entries.first().unwrap();
        assert_eq!(entry.id, sent.id);
        assert_eq!(entry.sender.as_str(), "ivy");
        assert_eq!(entry.body, "Is the Camry red?");
    }

    #[tokio::test]
    async fn test_customer_cannot_list() {
        let (pool, customer, _) = setup().await;
        assert!(matches!(
            MessagingService::new(&pool).list_all(&customer).await,
            Err(MessageError::Forbidden)
        ));
    }
}
