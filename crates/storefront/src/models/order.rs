//! Order domain types.

use chrono::{DateTime, Utc};
use serde::Serialize;

use carshop_core::{CarId, OrderId, OrderType, UserId, Username};

/// A recorded buy or preorder request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Order {
    pub id: OrderId,
    pub user_id: UserId,
    pub car_id: CarId,
    pub order_type: OrderType,
    pub created_at: DateTime<Utc>,
}

/// An order joined with its owner and car, for listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderSummary {
    pub id: OrderId,
    pub username: Username,
    pub car_id: CarId,
    pub car_model: String,
    pub order_type: OrderType,
    pub created_at: DateTime<Utc>,
}
