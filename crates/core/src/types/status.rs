//! Role and order-type enums.
//!
//! Both are stored as lowercase text in the database and parsed back with
//! [`FromStr`](std::str::FromStr).

use serde::{Deserialize, Serialize};

/// Account role assigned at registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Regular shopper.
    #[default]
    Customer,
    /// Can read every contact message.
    Admin,
}

impl Role {
    /// Database representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Customer => "customer",
            Self::Admin => "admin",
        }
    }

    #[must_use]
    pub const fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "customer" => Ok(Self::Customer),
            "admin" => Ok(Self::Admin),
            _ => Err(format!("invalid role: {s}")),
        }
    }
}

/// Kind of order a user places for a car.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderType {
    /// Immediate purchase.
    Buy,
    /// Reservation for a car that may not be in stock yet.
    Preorder,
}

impl OrderType {
    /// Database representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Buy => "buy",
            Self::Preorder => "preorder",
        }
    }
}

impl std::fmt::Display for OrderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for OrderType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "buy" => Ok(Self::Buy),
            "preorder" => Ok(Self::Preorder),
            _ => Err(format!("invalid order type: {s}")),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parse() {
        assert_eq!("customer".parse::<Role>().unwrap(), Role::Customer);
        assert_eq!("admin".parse::<Role>().unwrap(), Role::Admin);
        assert!("Admin".parse::<Role>().is_err());
        assert!("".parse::<Role>().is_err());
    }

    #[test]
    fn test_role_default_is_customer() {
        assert_eq!(Role::default(), Role::Customer);
        assert!(!Role::default().is_admin());
    }

    #[test]
    fn test_order_type_parse() {
        assert_eq!("buy".parse::<OrderType>().unwrap(), OrderType::Buy);
        assert_eq!("preorder".parse::<OrderType>().unwrap(), OrderType::Preorder);
        assert!("rent".parse::<OrderType>().is_err());
    }

    #[test]
    fn test_display_matches_storage_form() {
        assert_eq!(Role::Admin.to_string(), "admin");
        assert_eq!(OrderType::Preorder.to_string(), "preorder");
        assert_eq!(
            serde_json::to_string(&OrderType::Buy).unwrap(),
            "\"buy\""
        );
    }
}
