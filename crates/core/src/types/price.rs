//! Type-safe price representation using decimal arithmetic.

use std::iter::Sum;
use std::ops::Add;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A non-negative, currency-agnostic price.
///
/// Amounts are kept in the currency's standard unit (e.g. euros, not
/// cents) and formatted to two decimal places for display. Decimal
/// arithmetic avoids the float rounding artifacts the storefront's
/// original scripts were exposed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// Create a new price.
    ///
    /// Prices are non-negative; a negative `amount` is a caller bug and
    /// trips a debug assertion.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        debug_assert!(!amount.is_sign_negative(), "price amount cannot be negative");
        Self(amount)
    }

    /// Zero price.
    #[must_use]
    pub const fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Get the underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Multiply by a quantity, e.g. for a cart line total.
    #[must_use]
    pub fn times(&self, quantity: u32) -> Self {
        Self(self.0 * Decimal::from(quantity))
    }
}

impl From<Decimal> for Price {
    fn from(amount: Decimal) -> Self {
        Self::new(amount)
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.0.round_dp(2))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rust_decimal::dec;

    #[test]
    fn test_display_two_decimal_places() {
        assert_eq!(Price::new(dec!(30)).to_string(), "30.00");
        assert_eq!(Price::new(dec!(25.5)).to_string(), "25.50");
        assert_eq!(Price::new(dec!(19.995)).to_string(), "20.00");
    }

    #[test]
    fn test_times_quantity() {
        let price = Price::new(dec!(30.00));
        assert_eq!(price.times(2), Price::new(dec!(60.00)));
        assert_eq!(price.times(0), Price::zero());
    }

    #[test]
    fn test_sum() {
        let subtotal: Price = [Price::new(dec!(60.00)), Price::new(dec!(25.00))]
            .into_iter()
            .sum();
        assert_eq!(subtotal, Price::new(dec!(85.00)));
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "price amount cannot be negative")]
    fn test_new_rejects_negative_amount() {
        let _ = Price::new(dec!(-1.00));
    }

    #[test]
    fn test_serde_transparent() {
        let price = Price::new(dec!(30.00));
        let json = serde_json::to_string(&price).unwrap();
        let back: Price = serde_json::from_str(&json).unwrap();
        assert_eq!(price, back);
    }
}
