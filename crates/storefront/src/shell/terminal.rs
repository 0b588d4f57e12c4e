//! Interactive terminal front-end.
//!
//! Renders the current [`Screen`] with `dialoguer` prompts and forwards each
//! choice to the [`Shell`]. Prompts block the thread; the binary runs on a
//! current-thread runtime so nothing else is waiting on it.

#![allow(clippy::print_stdout)]

use dialoguer::{Confirm, Input, Password, Select};
use secrecy::SecretString;

use carshop_core::OrderType;

use super::{Level, Notification, Screen, Shell};
use crate::models::Car;
use crate::services::RegisterRequest;

/// What the user picked on the dashboard.
enum DashboardAction {
    Order(usize, OrderType),
    Orders,
    Contact,
    Messages,
    Logout,
    Quit,
}

/// Run until the user quits.
///
/// # Errors
///
/// Returns `dialoguer::Error` if the terminal cannot be read or written.
pub async fn run(shell: &mut Shell) -> Result<(), dialoguer::Error> {
    loop {
        let keep_going = match shell.screen() {
            Screen::Login => login_screen(shell).await?,
            Screen::Register => register_screen(shell).await?,
            Screen::Dashboard => dashboard_screen(shell).await?,
            Screen::Contact => contact_screen(shell).await?,
            Screen::Messages => messages_screen(shell).await?,
            Screen::Orders => orders_screen(shell).await?,
        };
        if !keep_going {
            return Ok(());
        }
    }
}

fn show(notification: &Notification) {
    let tag = match notification.level {
        Level::Info => "info",
        Level::Warning => "warning",
        Level::Error => "error",
    };
    println!();
    println!("[{tag}] {}: {}", notification.title, notification.message);
    println!();
}

fn heading(title: &str) {
    println!();
    println!("== {title} ==");
}

fn secret_prompt(prompt: &str) -> Result<SecretString, dialoguer::Error> {
    let value = Password::new()
        .with_prompt(prompt)
        .allow_empty_password(true)
        .interact()?;
    Ok(SecretString::from(value))
}

fn text_prompt(prompt: &str) -> Result<String, dialoguer::Error> {
    Input::<String>::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()
}

async fn login_screen(shell: &mut Shell) -> Result<bool, dialoguer::Error> {
    heading("CarShop - Login");
    let choice = Select::new()
        .items(&["Login", "Register", "Quit"])
        .default(0)
        .interact()?;

    match choice {
        0 => {
            let username = text_prompt("Username")?;
            let password = secret_prompt("Password")?;
            if let Some(notification) = shell.login(&username, &password).await {
                show(&notification);
            }
        }
        1 => shell.show_register(),
        _ => return Ok(false),
    }
    Ok(true)
}

async fn register_screen(shell: &mut Shell) -> Result<bool, dialoguer::Error> {
    heading("CarShop - Register");
    let choice = Select::new()
        .items(&["Register", "Back to Login"])
        .default(0)
        .interact()?;

    if choice != 0 {
        shell.show_login();
        return Ok(true);
    }

    let request = RegisterRequest {
        username: text_prompt("Username")?,
        password: secret_prompt("Password")?,
        confirm_password: secret_prompt("Confirm Password")?,
        wants_admin: Confirm::new()
            .with_prompt("Register as admin?")
            .default(false)
            .interact()?,
    };
    show(&shell.register(&request).await);
    Ok(true)
}

/// One line per car, e.g. `Toyota Camry - $24,000.00`.
fn car_line(car: &Car) -> String {
    format!("{} - {}", car.model, car.price.display())
}

fn dashboard_menu(cars: &[Car], is_admin: bool) -> (Vec<String>, Vec<DashboardAction>) {
    let mut labels = Vec::new();
    let mut actions = Vec::new();

    for (index, car) in cars.iter().enumerate() {
        if car.can_buy() {
            labels.push(format!("Buy {}", car.model));
            actions.push(DashboardAction::Order(index, OrderType::Buy));
        }
        if car.can_preorder() {
            labels.push(format!("Preorder {}", car.model));
            actions.push(DashboardAction::Order(index, OrderType::Preorder));
        }
    }

    labels.push("My Orders".to_owned());
    actions.push(DashboardAction::Orders);
    labels.push("Contact Us".to_owned());
    actions.push(DashboardAction::Contact);
    if is_admin {
        labels.push("View Messages".to_owned());
        actions.push(DashboardAction::Messages);
    }
    labels.push("Logout".to_owned());
    actions.push(DashboardAction::Logout);
    labels.push("Quit".to_owned());
    actions.push(DashboardAction::Quit);

    (labels, actions)
}

async fn dashboard_screen(shell: &mut Shell) -> Result<bool, dialoguer::Error> {
    let Some(session) = shell.session().cloned() else {
        shell.show_login();
        return Ok(true);
    };

    heading(&format!("Welcome, {}!", session.username));
    println!("Available Cars");

    let cars = match shell.cars().await {
        Ok(cars) => cars,
        Err(notification) => {
            show(&notification);
            Vec::new()
        }
    };
    if cars.is_empty() {
        println!("  No cars available.");
    }
    for car in &cars {
        println!("  {}", car_line(car));
    }
    println!();

    let (labels, mut actions) = dashboard_menu(&cars, session.is_admin());
    let choice = Select::new().items(&labels).default(0).interact()?;
    if choice >= actions.len() {
        return Ok(true);
    }

    match actions.swap_remove(choice) {
        DashboardAction::Order(index, order_type) => {
            if let Some(car) = cars.get(index) {
                show(&shell.place_order(car.id, order_type).await);
            }
        }
        DashboardAction::Orders => shell.show_orders(),
        DashboardAction::Contact => shell.show_contact(),
        DashboardAction::Messages => {
            if let Some(notification) = shell.show_messages() {
                show(&notification);
            }
        }
        DashboardAction::Logout => shell.logout(),
        DashboardAction::Quit => return Ok(false),
    }
    Ok(true)
}

async fn contact_screen(shell: &mut Shell) -> Result<bool, dialoguer::Error> {
    heading("Contact Us");
    let choice = Select::new()
        .items(&["Send Message", "Back to Dashboard"])
        .default(0)
        .interact()?;

    if choice == 0 {
        let body = text_prompt("Your message")?;
        show(&shell.send_message(&body).await);
    } else {
        shell.back_to_dashboard();
    }
    Ok(true)
}

async fn messages_screen(shell: &mut Shell) -> Result<bool, dialoguer::Error> {
    heading("Customer Messages");
    match shell.messages().await {
        Ok(entries) if entries.is_empty() => println!("  No messages yet."),
        Ok(entries) => {
            for entry in entries {
                println!(
                    "  #{} {} from {}: {}",
                    entry.id,
                    entry.created_at.format("%Y-%m-%d %H:%M"),
                    entry.sender,
                    entry.body
                );
            }
        }
        Err(notification) => show(&notification),
    }

    back_prompt(shell)
}

async fn orders_screen(shell: &mut Shell) -> Result<bool, dialoguer::Error> {
    heading("My Orders");
    match shell.orders().await {
        Ok(orders) if orders.is_empty() => println!("  No orders yet."),
        Ok(orders) => {
            for order in orders {
                println!(
                    "  #{} {} {} ({})",
                    order.id,
                    order.created_at.format("%Y-%m-%d %H:%M"),
                    order.car_model,
                    order.order_type
                );
            }
        }
        Err(notification) => show(&notification),
    }

    back_prompt(shell)
}

fn back_prompt(shell: &mut Shell) -> Result<bool, dialoguer::Error> {
    println!();
    Select::new()
        .items(&["Back to Dashboard"])
        .default(0)
        .interact()?;
    shell.back_to_dashboard();
    Ok(true)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use carshop_core::{CarId, Price};

    use super::*;

    fn car(id: i64, model: &str, available: bool, preorder_allowed: bool) -> Car {
        Car {
            id: CarId::new(id),
            model: model.to_owned(),
            price: Price::usd(24_000),
            available,
            preorder_allowed,
        }
    }

    #[test]
    fn test_car_line() {
        assert_eq!(
            car_line(&car(1, "Toyota Camry", true, false)),
            "Toyota Camry - $24,000.00"
        );
    }

    #[test]
    fn test_menu_offers_only_enabled_actions() {
        let cars = [
            car(1, "Honda Accord", true, false),
            car(2, "Tesla Model 3", false, true),
            car(3, "Ford Mustang", false, false),
        ];
        let (labels, actions) = dashboard_menu(&cars, false);

        assert_eq!(
            labels,
            [
                "Buy Honda Accord",
                "Preorder Tesla Model 3",
                "My Orders",
                "Contact Us",
                "Logout",
                "Quit"
            ]
        );
        assert_eq!(labels.len(), actions.len());
        assert!(matches!(
            actions.first().unwrap(),
            DashboardAction::Order(0, OrderType::Buy)
        ));
        assert!(matches!(
            actions.get(1).unwrap(),
            DashboardAction::Order(1, OrderType::Preorder)
        ));
    }

    #[test]
    fn test_admin_menu_has_messages() {
        let (labels, _) = dashboard_menu(&[], true);
        assert!(labels.iter().any(|l| l == "View Messages"));
        let (labels, _) = dashboard_menu(&[], false);
        assert!(!labels.iter().any(|l| l == "View Messages"));
    }
}
