//! Domain models for the storefront.
//!
//! These types represent validated domain objects separate from database row types.

pub mod car;
pub mod message;
pub mod order;
pub mod session;
pub mod user;

pub use car::Car;
pub use message::{Message, MessageEntry};
pub use order::{Order, OrderSummary};
pub use session::Session;
pub use user::User;
