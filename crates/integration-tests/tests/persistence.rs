//! Integration tests for schema initialization, seeding and reopen.

#![allow(clippy::unwrap_used)]

use carshop_integration_tests::{PASSWORD, register, secret};
use carshop_storefront::config::StorefrontConfig;
use carshop_storefront::db;
use carshop_storefront::state::AppState;

fn file_config(dir: &tempfile::TempDir) -> StorefrontConfig {
    StorefrontConfig::with_database_path(dir.path().join("carshop.db")).unwrap()
}

#[tokio::test]
async fn test_fresh_store_has_seed_cars_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let state = AppState::open(file_config(&dir)).await.unwrap();

    let cars: Vec<(String, String, bool, bool)> = state
        .catalog()
        .list_cars()
        .await
        .unwrap()
        .into_iter()
        .map(|car| {
            (
                car.model,
                car.price.display(),
                car.available,
                car.preorder_allowed,
            )
        })
        .collect();

    let expected = [
        ("Toyota Camry", "$24,000.00", true, true),
        ("Honda Accord", "$26,000.00", true, true),
        ("Tesla Model 3", "$35,000.00", false, true),
        ("Ford Mustang", "$30,000.00", true, false),
        ("BMW 3 Series", "$40,000.00", true, true),
    ]
    .map(|(model, price, available, preorder)| {
        (model.to_owned(), price.to_owned(), available, preorder)
    });
    assert_eq!(cars, expected);

    state.close().await;
}

#[tokio::test]
async fn test_reopen_does_not_duplicate_seed() {
    let dir = tempfile::tempdir().unwrap();

    let state = AppState::open(file_config(&dir)).await.unwrap();
    state.close().await;

    let state = AppState::open(file_config(&dir)).await.unwrap();
    assert_eq!(state.catalog().list_cars().await.unwrap().len(), 5);

    // Running init again on the open pool seeds nothing.
    assert_eq!(db::init(state.pool()).await.unwrap(), 0);
    assert_eq!(state.catalog().list_cars().await.unwrap().len(), 5);

    state.close().await;
}

#[tokio::test]
async fn test_accounts_and_orders_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();

    let state = AppState::open(file_config(&dir)).await.unwrap();
    let session = register(&state, "tara", false).await;
    state
        .catalog()
        .place_order(&session, carshop_core::CarId::new(2), carshop_core::OrderType::Buy)
        .await
        .unwrap();
    state.messaging().send(&session, "hello").await.unwrap();
    state.close().await;

    let state = AppState::open(file_config(&dir)).await.unwrap();
    let again = state.auth().login("tara", &secret(PASSWORD)).await.unwrap();
    assert_eq!(again.user_id, session.user_id);
    assert_eq!(state.catalog().list_orders(&again).await.unwrap().len(), 1);
    assert_eq!(state.messaging().count().await.unwrap(), 1);
    state.close().await;
}

#[tokio::test]
async fn test_database_file_is_created() {
    let dir = tempfile::tempdir().unwrap();
    let config = file_config(&dir);
    assert!(!config.database_path.exists());

    let state = AppState::open(config.clone()).await.unwrap();
    assert!(config.database_path.exists());
    state.close().await;
}
