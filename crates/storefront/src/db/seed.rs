//! Default car inventory.

use sqlx::SqlitePool;

use super::RepositoryError;

/// A seed row for the `cars` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedCar {
    pub model: &'static str,
    /// Whole US dollars.
    pub price: u32,
    pub available: bool,
    pub preorder_allowed: bool,
}

/// Inserted, in this order, when the `cars` table is empty.
///
/// Covers every combination of the two availability flags.
pub const DEFAULT_CARS: [SeedCar; 5] = [
    SeedCar {
        model: "Toyota Camry",
        price: 24_000,
        available: true,
        preorder_allowed: true,
    },
    SeedCar {
        model: "Honda Accord",
        price: 26_000,
        available: true,
        preorder_allowed: true,
    },
    // unavailable but preorder allowed
    SeedCar {
        model: "Tesla Model 3",
        price: 35_000,
        available: false,
        preorder_allowed: true,
    },
    // no preorder allowed
    SeedCar {
        model: "Ford Mustang",
        price: 30_000,
        available: true,
        preorder_allowed: false,
    },
    SeedCar {
        model: "BMW 3 Series",
        price: 40_000,
        available: true,
        preorder_allowed: true,
    },
];

/// Insert [`DEFAULT_CARS`] if the inventory is empty.
///
/// The emptiness check and the inserts share one transaction.
///
/// # Errors
///
/// Returns `RepositoryError::Database` if any statement fails.
pub async fn seed_cars(pool: &SqlitePool) -> Result<u64, RepositoryError> {
    let mut tx = pool.begin().await?;

    let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM cars")
        .fetch_one(&mut *tx)
        .await?;
    if existing > 0 {
        return Ok(0);
    }

    let mut inserted = 0;
    for car in &DEFAULT_CARS {
        sqlx::query(
            r"
            INSERT INTO cars (model, price, available, preorder_allowed)
            VALUES (?, ?, ?, ?)
            ",
        )
        .bind(car.model)
        .bind(f64::from(car.price))
        .bind(car.available)
        .bind(car.preorder_allowed)
        .execute(&mut *tx)
        .await?;
        inserted += 1;
    }

    tx.commit().await?;
    Ok(inserted)
}
