//! User domain types.

use carshop_core::{Role, UserId, Username};

/// A registered account (domain type).
///
/// The password hash stays in the repository layer and is never part of this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    /// Unique login name.
    pub username: Username,
    /// Role chosen at registration.
    pub role: Role,
}
