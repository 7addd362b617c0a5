//! Value objects: equality by value, not identity.

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, CatalogResult};

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**: two prices of
/// the same amount are interchangeable, while two products with the same
/// attributes but different ids are not (see [`crate::Entity`]).
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}

/// A non-negative price, stored in whole cents.
///
/// Serialized as a decimal dollar amount (`1999` or `12.5`) so datasets read
/// naturally.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Price(u64);

impl ValueObject for Price {}

impl Price {
    pub const ZERO: Price = Price(0);

    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    pub const fn from_dollars(dollars: u64) -> Self {
        Self(dollars * 100)
    }

    /// Build a price from a dollar amount, rounding to the nearest cent.
    pub fn try_from_f64(dollars: f64) -> CatalogResult<Self> {
        if !dollars.is_finite() {
            return Err(CatalogError::validation("price must be a finite amount"));
        }
        if dollars < 0.0 {
            return Err(CatalogError::validation("price cannot be negative"));
        }
        let cents = (dollars * 100.0).round();
        if cents >= u64::MAX as f64 {
            return Err(CatalogError::validation("price is too large"));
        }
        Ok(Self(cents as u64))
    }

    pub fn cents(&self) -> u64 {
        self.0
    }

    /// Whole-dollar part of the amount.
    pub fn whole_dollars(&self) -> u64 {
        self.0 / 100
    }

    /// Cents past the whole-dollar part (`0..=99`).
    pub fn cent_part(&self) -> u64 {
        self.0 % 100
    }

    /// The amount in dollars, for comparison against numeric bounds.
    pub fn as_dollars(&self) -> f64 {
        self.0 as f64 / 100.0
    }
}

impl TryFrom<f64> for Price {
    type Error = CatalogError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::try_from_f64(value)
    }
}

impl From<Price> for f64 {
    fn from(value: Price) -> Self {
        value.as_dollars()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dollars_and_cents_agree() {
        let price = Price::from_dollars(1999);
        assert_eq!(price.cents(), 199_900);
        assert_eq!(price.whole_dollars(), 1999);
        assert_eq!(price.cent_part(), 0);
        assert_eq!(price.as_dollars(), 1999.0);
    }

    #[test]
    fn fractional_amounts_round_to_nearest_cent() {
        let price = Price::try_from_f64(12.345).unwrap();
        assert_eq!(price.cents(), 1235);
        assert_eq!(price.cent_part(), 35);
    }

    #[test]
    fn rejects_negative_and_non_finite_amounts() {
        assert!(matches!(
            Price::try_from_f64(-1.0),
            Err(CatalogError::Validation(_))
        ));
        assert!(matches!(
            Price::try_from_f64(f64::NAN),
            Err(CatalogError::Validation(_))
        ));
        assert!(matches!(
            Price::try_from_f64(f64::INFINITY),
            Err(CatalogError::Validation(_))
        ));
    }

    #[test]
    fn rejects_amounts_beyond_cent_range() {
        assert!(matches!(
            Price::try_from_f64(1e30),
            Err(CatalogError::Validation(_))
        ));
        assert!(matches!(
            Price::try_from_f64(1e18),
            Err(CatalogError::Validation(_))
        ));
        assert_eq!(
            Price::try_from_f64(1e15).unwrap(),
            Price::from_cents(100_000_000_000_000_000)
        );
    }

    #[test]
    fn serde_uses_dollar_amounts() {
        let price: Price = serde_json::from_str("899").unwrap();
        assert_eq!(price, Price::from_dollars(899));
        assert_eq!(serde_json::to_string(&Price::from_cents(1250)).unwrap(), "12.5");
        assert!(serde_json::from_str::<Price>("-3").is_err());
    }
}
