//! Authentication service.
//!
//! Provides password registration and login. A successful login yields a
//! [`Session`] that the caller keeps and passes to other services.

mod error;
pub mod password;

pub use error::AuthError;
pub use password::{hash_password, verify_password};

use secrecy::{ExposeSecret, SecretString};
use sqlx::SqlitePool;
use tracing::{info, instrument, warn};

use carshop_core::{Role, Username};

use crate::db::RepositoryError;
use crate::db::users::UserRepository;
use crate::models::{Session, User};

/// Input of the registration form.
#[derive(Debug)]
pub struct RegisterRequest {
    pub username: String,
    pub password: SecretString,
    pub confirm_password: SecretString,
    /// The "Register as admin" checkbox.
    pub wants_admin: bool,
}

/// Authentication service.
///
/// Handles user registration and login.
pub struct AuthService<'a> {
    users: UserRepository<'a>,
}

impl<'a> AuthService<'a> {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self {
            users: UserRepository::new(pool),
        }
    }

    /// Register a new user.
    ///
    /// Any registrant may choose the admin role.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Validation` if a field is empty or the passwords differ.
    /// Returns `AuthError::UserAlreadyExists` if the username is taken.
    #[instrument(skip_all, fields(username = %request.username.trim(), wants_admin = request.wants_admin))]
    pub async fn register(&self, request: &RegisterRequest) -> Result<User, AuthError> {
        let password = request.password.expose_secret();
        let confirm = request.confirm_password.expose_secret();

        if request.username.trim().is_empty() || password.is_empty() || confirm.is_empty() {
            return Err(AuthError::Validation("Please fill all fields.".to_owned()));
        }
        if password != confirm {
            return Err(AuthError::Validation("Passwords do not match.".to_owned()));
        }

        let username =
            Username::parse(&request.username).map_err(|e| AuthError::Validation(e.to_string()))?;
        let role = if request.wants_admin {
            Role::Admin
        } else {
            Role::Customer
        };

        let password_hash = hash_password(password)?;

        let user = self
            .users
            .create(&username, &password_hash, role)
            .await
            .map_err(|e| match e {
                RepositoryError::Conflict(_) => AuthError::UserAlreadyExists,
                other => AuthError::Repository(other),
            })?;

        info!(user_id = %user.id, role = %user.role, "User registered");
        Ok(user)
    }

    /// Login with username and password.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Validation` if either field is empty.
    /// Returns `AuthError::InvalidCredentials` if the user is unknown or the password is wrong.
    #[instrument(skip(self, password))]
    pub async fn login(&self, username: &str, password: &SecretString) -> Result<Session, AuthError> {
        let username = username.trim();
        let password = password.expose_secret();

        if username.is_empty() || password.is_empty() {
            return Err(AuthError::Validation(
                "Please enter username and password.".to_owned(),
            ));
        }

        let Some((user, password_hash)) = self.users.get_password_hash(username).await? else {
            warn!("Login failed: unknown username");
            return Err(AuthError::InvalidCredentials);
        };

        if !verify_password(password, &password_hash) {
            warn!(user_id = %user.id, "Login failed: wrong password");
            return Err(AuthError::InvalidCredentials);
        }

        info!(user_id = %user.id, role = %user.role, "User logged in");
        Ok(Session::from(user))
    }

    /// Clear the session, whatever its state.
    pub fn logout(session: &mut Option<Session>) {
        if let Some(previous) = session.take() {
            info!(user_id = %previous.user_id, "User logged out");
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::db;

    fn secret(s: &str) -> SecretString {
        SecretString::from(s.to_owned())
    }

    fn request(username: &str, password: &str, confirm: &str) -> RegisterRequest {
        RegisterRequest {
            username: username.to_owned(),
            password: secret(password),
            confirm_password: secret(confirm),
            wants_admin: false,
        }
    }

    async fn pool() -> SqlitePool {
        let pool = db::open_pool_in_memory().await.unwrap();
        db::init(&pool).await.unwrap();
        pool
    }

    #[tokio::test]
    async fn test_register_rejects_empty_fields() {
        let pool = pool().await;
        let auth = AuthService::new(&pool);

        for req in [
            request("", "pw", "pw"),
            request("   ", "pw", "pw"),
            request("alice", "", "pw"),
            request("alice", "pw", ""),
        ] {
            let err = auth.register(&req).await.unwrap_err();
            assert!(matches!(err, AuthError::Validation(_)), "{err:?}");
        }
    }

    #[tokio::test]
    async fn test_register_rejects_mismatch() {
        let pool = pool().await;
        let err = AuthService::new(&pool)
            .register(&request("alice", "pw1", "pw2"))
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::Validation(ref m) if m == "Passwords do not match."));
    }

    #[tokio::test]
    async fn test_register_assigns_role() {
        let pool = pool().await;
        let auth = AuthService::new(&pool);

        let customer = auth.register(&request("carol", "pw", "pw")).await.unwrap();
        assert_eq!(customer.role, Role::Customer);

        let mut admin_req = request("dave", "pw", "pw");
        admin_req.wants_admin = true;
        let admin = auth.register(&admin_req).await.unwrap();
        assert_eq!(admin.role, Role::Admin);
    }

    #[tokio::test]
    async fn test_register_trims_username() {
        let pool = pool().await;
        let auth = AuthService::new(&pool);

        let user = auth.register(&request("  erin ", "pw", "pw")).await.unwrap();
        assert_eq!(user.username.as_str(), "erin");

        let session = auth.login("erin", &secret("pw")).await.unwrap();
        assert_eq!(session.user_id, user.id);
    }

    #[tokio::test]
    async fn test_register_long_username() {
        let pool = pool().await;
        let auth = AuthService::new(&pool);
        let long = "a".repeat(65);

        let user = auth.register(&request(&long, "pw", "pw")).await.unwrap();
        assert_eq!(user.username.as_str(), long);
        assert!(auth.login(&long, &secret("pw")).await.is_ok());
    }

    #[tokio::test]
    async fn test_legacy_blob_hash_is_invalid_credentials() {
        let pool = pool().await;
        // bcrypt-style hash stored as a BLOB, then bytes that are not UTF-8.
        sqlx::query(
            "INSERT INTO users (username, password, role) VALUES \
             ('legacy', X'243262243132244142434445', 'customer'), \
             ('binary', X'FFFE00', 'customer')",
        )
        .execute(&pool)
        .await
        .unwrap();
        let auth = AuthService::new(&pool);

        for username in ["legacy", "binary"] {
            let err = auth.login(username, &secret("pw")).await.unwrap_err();
            assert!(matches!(err, AuthError::InvalidCredentials), "{err:?}");
            assert_eq!(
                crate::error::AppError::from(err).kind(),
                crate::error::ErrorKind::Auth
            );
        }
    }

    #[tokio::test]
    async fn test_login_empty_fields() {
        let pool = pool().await;
        let auth = AuthService::new(&pool);

        assert!(matches!(
            auth.login("", &secret("pw")).await,
            Err(AuthError::Validation(_))
        ));
        assert!(matches!(
            auth.login("alice", &secret("")).await,
            Err(AuthError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let pool = pool().await;
        let auth = AuthService::new(&pool);
        auth.register(&request("frank", "right", "right"))
            .await
            .unwrap();

        assert!(matches!(
            auth.login("frank", &secret("wrong")).await,
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_logout_clears_session() {
        let mut session = Some(Session {
            user_id: carshop_core::UserId::new(1),
            username: Username::parse("gina").unwrap(),
            role: Role::Customer,
        });
        AuthService::logout(&mut session);
        assert!(session.is_none());

        // No session is fine too.
        AuthService::logout(&mut session);
        assert!(session.is_none());
    }
}
