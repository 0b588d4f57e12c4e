//! Type-safe price representation using decimal arithmetic.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A price with currency information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit (e.g., dollars, not cents).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency_code: CurrencyCode,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// Create a USD price from a whole-dollar amount.
    #[must_use]
    pub fn usd(dollars: i64) -> Self {
        Self::new(Decimal::from(dollars), CurrencyCode::USD)
    }

    /// Whether the amount is zero or positive.
    #[must_use]
    pub const fn is_non_negative(&self) -> bool {
        !self.amount.is_sign_negative() || self.amount.is_zero()
    }

    /// Format for display with thousands separators (e.g., "$24,000.00").
    #[must_use]
    pub fn display(&self) -> String {
        let rounded = self.amount.round_dp(2);
        let text = format!("{:.2}", rounded.abs());
        let (whole, fraction) = text.split_once('.').unwrap_or((text.as_str(), "00"));

        let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
        for (i, digit) in whole.chars().enumerate() {
            if i > 0 && (whole.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(digit);
        }

        let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
            "-"
        } else {
            ""
        };
        format!(
            "{sign}{}{grouped}.{fraction}",
            self.currency_code.symbol()
        )
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    USD,
    EUR,
    GBP,
    CAD,
    AUD,
}

impl CurrencyCode {
    /// Currency symbol used when formatting prices.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::USD | Self::CAD | Self::AUD => "$",
            Self::EUR => "€",
            Self::GBP => "£",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_groups_thousands() {
        assert_eq!(Price::usd(24_000).display(), "$24,000.00");
        assert_eq!(Price::usd(1_234_567).display(), "$1,234,567.00");
        assert_eq!(Price::usd(999).display(), "$999.00");
        assert_eq!(Price::usd(0).display(), "$0.00");
    }

    #[test]
    fn test_display_rounds_cents() {
        let price = Price::new(Decimal::new(1_999_995, 3), CurrencyCode::USD);
        assert_eq!(price.display(), "$2,000.00");
    }

    #[test]
    fn test_display_other_currency() {
        let price = Price::new(Decimal::new(4_050, 2), CurrencyCode::GBP);
        assert_eq!(price.to_string(), "£40.50");
    }

    #[test]
    fn test_non_negative() {
        assert!(Price::usd(0).is_non_negative());
        assert!(Price::usd(35_000).is_non_negative());
        assert!(!Price::usd(-1).is_non_negative());
    }
}
