//! Business logic services for the storefront.
//!
//! # Services
//!
//! - `auth` - Password hashing, registration, login and logout
//! - `catalog` - Car listing and order placement
//! - `messaging` - Contact messages and the admin message list
//!
//! Services borrow the connection pool and are cheap to construct per action.
//! Calls that act for a user take the caller's [`Session`](crate::models::Session).

pub mod auth;
pub mod catalog;
pub mod messaging;

pub use auth::{AuthError, AuthService, RegisterRequest};
pub use catalog::{CatalogService, OrderError};
pub use messaging::{MessageError, MessagingService};
