//! Integration tests for full screen flows.

#![allow(clippy::unwrap_used)]

use carshop_core::{CarId, OrderType};
use carshop_integration_tests::{PASSWORD, memory_state, register_request, secret};
use carshop_storefront::shell::{Level, Screen, Shell};

#[tokio::test]
async fn test_customer_journey() {
    let mut shell = Shell::new(memory_state().await);
    assert_eq!(shell.screen(), Screen::Login);

    shell.show_register();
    let note = shell
        .register(&register_request("uma", PASSWORD, false))
        .await;
    assert_eq!(note.level, Level::Info);
    assert_eq!(shell.screen(), Screen::Login);

    assert!(shell.login("uma", &secret(PASSWORD)).await.is_none());
    assert_eq!(shell.screen(), Screen::Dashboard);

    let cars = shell.cars().await.unwrap();
    assert_eq!(cars.len(), 5);

    let note = shell.place_order(CarId::new(3), OrderType::Preorder).await;
    assert_eq!(
        note.message,
        "Your preorder order has been placed successfully!"
    );

    shell.show_orders();
    assert_eq!(shell.screen(), Screen::Orders);
    let orders = shell.orders().await.unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders.first().unwrap().car_model, "Tesla Model 3");
    shell.back_to_dashboard();

    shell.show_contact();
    let note = shell.send_message("When does the Tesla ship?").await;
    assert_eq!(note.message, "Your message has been sent successfully!");
    assert_eq!(shell.screen(), Screen::Dashboard);

    // Customers are kept out of the message list.
    let note = shell.show_messages().unwrap();
    assert_eq!(note.level, Level::Warning);
    assert_eq!(shell.screen(), Screen::Dashboard);

    shell.logout();
    assert_eq!(shell.screen(), Screen::Login);
    assert!(shell.session().is_none());

    shell.shutdown().await;
}

#[tokio::test]
async fn test_admin_sees_customer_messages() {
    let state = memory_state().await;

    let mut customer = Shell::new(state.clone());
    customer
        .register(&register_request("vic", PASSWORD, false))
        .await;
    customer.login("vic", &secret(PASSWORD)).await;
    customer.show_contact();
    customer.send_message("Is financing available?").await;

    let mut admin = Shell::new(state);
    admin
        .register(&register_request("wes", PASSWORD, true))
        .await;
    admin.login("wes", &secret(PASSWORD)).await;
    assert!(admin.show_messages().is_none());
    assert_eq!(admin.screen(), Screen::Messages);

    let entries = admin.messages().await.unwrap();
    assert_eq!(entries.len(), 1);
    let entry = entries.first().unwrap();
    assert_eq!(entry.sender.as_str(), "vic");
    assert_eq!(entry.body, "Is financing available?");
}

#[tokio::test]
async fn test_bad_login_reports_and_stays() {
    let mut shell = Shell::new(memory_state().await);
    let note = shell.login("", &secret("")).await.unwrap();
    assert_eq!(note.level, Level::Warning);
    assert_eq!(note.message, "Please enter username and password.");
    assert_eq!(shell.screen(), Screen::Login);
}
