//! Session-related types.

use serde::{Deserialize, Serialize};

use carshop_core::{Role, UserId, Username};

use super::User;

/// The authenticated user of a running shell.
///
/// Held by the front-end and passed into every service call that acts on
/// behalf of a user. It lives only in memory; logging out drops it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// User's database ID.
    pub user_id: UserId,
    /// User's login name.
    pub username: Username,
    /// Role at login time.
    pub role: Role,
}

impl Session {
    #[must_use]
    pub const fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

impl From<User> for Session {
    fn from(user: User) -> Self {
        Self {
            user_id: user.id,
            username: user.username,
            role: user.role,
        }
    }
}
