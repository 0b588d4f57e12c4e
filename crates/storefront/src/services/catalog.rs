//! Car catalog and ordering.

use chrono::Utc;
use sqlx::SqlitePool;
use thiserror::Error;
use tracing::{info, instrument};

use carshop_core::{CarId, OrderType};

use crate::config::{OrderPolicy, StorefrontConfig};
use crate::db::RepositoryError;
use crate::db::cars::CarRepository;
use crate::db::orders::OrderRepository;
use crate::models::{Car, Order, OrderSummary, Session};

/// Errors that can occur while placing or listing orders.
#[derive(Debug, Error)]
pub enum OrderError {
    /// The car ID does not exist.
    #[error("car {0} not found")]
    CarNotFound(CarId),

    /// `buy` on a car that is not available.
    #[error("{0} is not available for purchase")]
    NotAvailable(String),

    /// `preorder` on a car that does not accept preorders.
    #[error("{0} cannot be preordered")]
    PreorderNotAllowed(String),

    /// Repository/database error.
    #[error("database error: {0}")]
    Repository(#[from] RepositoryError),
}

/// Car listing and order placement.
pub struct CatalogService<'a> {
    cars: CarRepository<'a>,
    orders: OrderRepository<'a>,
    policy: OrderPolicy,
}

impl<'a> CatalogService<'a> {
    #[must_use]
    pub const fn new(pool: &'a SqlitePool, config: &StorefrontConfig) -> Self {
        Self {
            cars: CarRepository::new(pool, config.currency),
            orders: OrderRepository::new(pool),
            policy: config.order_policy,
        }
    }

    /// All cars in insertion order. An empty list is a valid result.
    ///
    /// # Errors
    ///
    /// Returns `OrderError::Repository` if the query fails.
    pub async fn list_cars(&self) -> Result<Vec<Car>, OrderError> {
        Ok(self.cars.list().await?)
    }

    /// Record an order for the session's user.
    ///
    /// Under [`OrderPolicy::Enforce`] the car's flags must allow the order type.
    ///
    /// # Errors
    ///
    /// Returns `OrderError::CarNotFound` if the car does not exist.
    /// Returns `OrderError::NotAvailable` / `OrderError::PreorderNotAllowed`
    /// when the policy rejects the order.
    #[instrument(skip(self, session), fields(user_id = %session.user_id))]
    pub async fn place_order(
        &self,
        session: &Session,
        car_id: CarId,
        order_type: OrderType,
    ) -> Result<Order, OrderError> {
        let car = self
            .cars
            .get(car_id)
            .await?
            .ok_or(OrderError::CarNotFound(car_id))?;

        if self.policy == OrderPolicy::Enforce && !car.allows(order_type) {
            return Err(match order_type {
                OrderType::Buy => OrderError::NotAvailable(car.model),
                OrderType::Preorder => OrderError::PreorderNotAllowed(car.model),
            });
        }

        let order = self
            .orders
            .create(session.user_id, car_id, order_type, Utc::now())
            .await?;

        info!(order_id = %order.id, model = %car.model, "Order placed");
        Ok(order)
    }

    /// Orders placed by the session's user, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `OrderError::Repository` if the query fails.
    pub async fn list_orders(&self, session: &Session) -> Result<Vec<OrderSummary>, OrderError> {
        Ok(self.orders.list_for_user(session.user_id).await?)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use carshop_core::{Role, UserId, Username};

    use super::*;
    use crate::db;

    async fn setup() -> (SqlitePool, Session) {
        let pool = db::open_pool_in_memory().await.unwrap();
        db::init(&pool).await.unwrap();

        let user = db::users::UserRepository::new(&pool)
            .create(&Username::parse("hank").unwrap(), "hash", Role::Customer)
            .await
            .unwrap();
        (pool, Session::from(user))
    }

    #[tokio::test]
    async fn test_list_cars_in_seed_order() {
        let (pool, _) = setup().await;
        let config = StorefrontConfig::default();
        let cars = CatalogService::new(&pool, &config).list_cars().await.unwrap();

        let models: Vec<&str> = cars.iter().map(|c| c.model.as_str()).collect();
        assert_eq!(
            models,
            [
                "Toyota Camry",
                "Honda Accord",
                "Tesla Model 3",
                "Ford Mustang",
                "BMW 3 Series"
            ]
        );
        assert_eq!(cars.first().unwrap().price.display(), "$24,000.00");
    }

    #[tokio::test]
    async fn test_enforce_rejects_unavailable_buy() {
        let (pool, session) = setup().await;
        let config = StorefrontConfig::default();
        let catalog = CatalogService::new(&pool, &config);

        // Tesla Model 3 is seeded unavailable.
        let err = catalog
            .place_order(&session, CarId::new(3), OrderType::Buy)
            .await
            .unwrap_err();
        assert!(matches!(err, OrderError::NotAvailable(ref m) if m == "Tesla Model 3"));

        // Ford Mustang is seeded without preorders.
        let err = catalog
            .place_order(&session, CarId::new(4), OrderType::Preorder)
            .await
            .unwrap_err();
        assert!(matches!(err, OrderError::PreorderNotAllowed(_)));

        assert!(catalog.list_orders(&session).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_permissive_records_any_order() {
        let (pool, session) = setup().await;
        let config = StorefrontConfig::default().with_order_policy(OrderPolicy::Permissive);
        let catalog = CatalogService::new(&pool, &config);

        let order = catalog
            .place_order(&session, CarId::new(3), OrderType::Buy)
            .await
            .unwrap();
        assert_eq!(order.car_id, CarId::new(3));
        assert_eq!(order.order_type, OrderType::Buy);
    }

    #[tokio::test]
    async fn test_unknown_car() {
        let (pool, session) = setup().await;
        let config = StorefrontConfig::default().with_order_policy(OrderPolicy::Permissive);
        let err = CatalogService::new(&pool, &config)
            .place_order(&session, CarId::new(99), OrderType::Preorder)
            .await
            .unwrap_err();
        assert!(matches!(err, OrderError::CarNotFound(id) if id == CarId::new(99)));
    }

    #[tokio::test]
    async fn test_order_for_missing_user_is_store_error() {
        let (pool, _) = setup().await;
        let config = StorefrontConfig::default();
        let ghost = Session {
            user_id: UserId::new(404),
            username: Username::parse("ghost").unwrap(),
            role: Role::Customer,
        };
        let err = CatalogService::new(&pool, &config)
            .place_order(&ghost, CarId::new(1), OrderType::Buy)
            .await
            .unwrap_err();
        assert!(matches!(err, OrderError::Repository(_)));
    }
}
