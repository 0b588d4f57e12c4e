//! Read-only listings.
//!
//! Text goes to stdout one row per line; `--json` prints a pretty JSON array
//! of the same rows instead.

#![allow(clippy::print_stdout)]

use std::path::Path;

use serde::Serialize;

use carshop_storefront::db::cars::CarRepository;
use carshop_storefront::db::messages::MessageRepository;
use carshop_storefront::db::orders::OrderRepository;
use carshop_storefront::models::{Car, MessageEntry, OrderSummary};

use super::open;

type CommandResult = Result<(), Box<dyn std::error::Error>>;

fn print_json<T: Serialize>(rows: &[T]) -> CommandResult {
    println!("{}", serde_json::to_string_pretty(rows)?);
    Ok(())
}

fn car_row(car: &Car) -> String {
    let mut flags = Vec::new();
    if car.available {
        flags.push("available");
    }
    if car.preorder_allowed {
        flags.push("preorder");
    }
    format!(
        "{:>3}  {:<16} {:>12}  {}",
        car.id,
        car.model,
        car.price.display(),
        flags.join(",")
    )
}

fn order_row(order: &OrderSummary) -> String {
    format!(
        "{:>4}  {}  {:<12} {:<8} {}",
        order.id,
        order.created_at.format("%Y-%m-%d %H:%M:%S"),
        order.username,
        order.order_type,
        order.car_model
    )
}

fn message_row(entry: &MessageEntry) -> String {
    format!(
        "{:>4}  {}  {:<12} {}",
        entry.id,
        entry.created_at.format("%Y-%m-%d %H:%M:%S"),
        entry.sender,
        entry.body
    )
}

/// List the car inventory.
///
/// # Errors
///
/// Returns an error if the database cannot be read.
pub async fn cars(path: &Path, json: bool) -> CommandResult {
    let state = open(path).await?;
    let cars = CarRepository::new(state.pool(), state.config().currency)
        .list()
        .await?;
    state.close().await;

    if json {
        return print_json(&cars);
    }
    for car in &cars {
        println!("{}", car_row(car));
    }
    tracing::info!(count = cars.len(), "Listed cars");
    Ok(())
}

/// List every order with its customer and car.
///
/// # Errors
///
/// Returns an error if the database cannot be read.
pub async fn orders(path: &Path, json: bool) -> CommandResult {
    let state = open(path).await?;
    let orders = OrderRepository::new(state.pool()).list_all().await?;
    state.close().await;

    if json {
        return print_json(&orders);
    }
    for order in &orders {
        println!("{}", order_row(order));
    }
    tracing::info!(count = orders.len(), "Listed orders");
    Ok(())
}

/// List every contact message with its sender.
///
/// # Errors
///
/// Returns an error if the database cannot be read.
pub async fn messages(path: &Path, json: bool) -> CommandResult {
    let state = open(path).await?;
    let entries = MessageRepository::new(state.pool()).list_all().await?;
    state.close().await;

    if json {
        return print_json(&entries);
    }
    for entry in &entries {
        println!("{}", message_row(entry));
    }
    tracing::info!(count = entries.len(), "Listed messages");
    Ok(())
}

#[cfg(test)]
mod tests {
    use carshop_core::{CarId, Price};

    use super::*;

    #[test]
    fn test_car_row_flags() {
        let car = Car {
            id: CarId::new(3),
            model: "Tesla Model 3".to_owned(),
            price: Price::usd(35_000),
            available: false,
            preorder_allowed: true,
        };
        let row = car_row(&car);
        assert!(row.contains("Tesla Model 3"));
        assert!(row.contains("$35,000.00"));
        assert!(row.ends_with("preorder"));
    }
}
