//! Car inventory domain type.

use serde::Serialize;

use carshop_core::{CarId, OrderType, Price};

/// A car in the inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Car {
    pub id: CarId,
    pub model: String,
    pub price: Price,
    /// Can be bought right now.
    pub available: bool,
    /// Can be reserved ahead of availability.
    pub preorder_allowed: bool,
}

impl Car {
    /// Whether the "Buy" action is offered for this car.
    #[must_use]
    pub const fn can_buy(&self) -> bool {
        self.available
    }

    /// Whether the "Preorder" action is offered for this car.
    #[must_use]
    pub const fn can_preorder(&self) -> bool {
        self.preorder_allowed
    }

    /// Whether an order of the given type is offered for this car.
    #[must_use]
    pub const fn allows(&self, order_type: OrderType) -> bool {
        match order_type {
            OrderType::Buy => self.can_buy(),
            OrderType::Preorder => self.can_preorder(),
        }
    }
}
