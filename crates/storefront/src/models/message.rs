//! Contact message domain types.

use chrono::{DateTime, Utc};
use serde::Serialize;

use carshop_core::{MessageId, UserId, Username};

/// A stored contact message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    pub id: MessageId,
    pub user_id: UserId,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

/// A message joined with its sender's username, as shown to admins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageEntry {
    pub id: MessageId,
    pub sender: Username,
    pub body: String,
    pub created_at: DateTime<Utc>,
}
