//! CarShop Core - Shared types library.
//!
//! This crate provides common types used across all CarShop components:
//! - `storefront` - Services, persistence and the terminal shell
//! - `cli` - Command-line tools for database setup and inspection
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no database access.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, usernames, and roles

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
