//! CarShop storefront library.
//!
//! Accounts, the car catalog, orders and contact messages over a local
//! `SQLite` file, plus the screen state machine the `carshop` binary drives.
//! Exposed as a library so the CLI and integration tests can reuse it.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod services;
pub mod shell;
pub mod state;
