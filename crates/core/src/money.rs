//! Money as an amount in the smallest currency unit.

use serde::{Deserialize, Serialize};

use crate::value_object::ValueObject;

/// A monetary amount in cents.
///
/// Catalog prices are positive; `Money::ZERO` only appears in derived values
/// (empty-cart subtotal, waived shipping). Arithmetic saturates rather than
/// wrapping: a cart big enough to overflow u64 cents is not a real cart.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    /// Build from whole currency units, e.g. `Money::from_units(10)` is $10.00.
    pub const fn from_units(units: u64) -> Self {
        Self(units * 100)
    }

    pub const fn cents(self) -> u64 {
        self.0
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Whole-unit value rounded down ($19.99 -> 19).
    pub const fn units_floor(self) -> u64 {
        self.0 / 100
    }

    /// Whole-unit value rounded up ($19.99 -> 20).
    pub const fn units_ceil(self) -> u64 {
        self.0.div_ceil(100)
    }

    pub const fn saturating_add(self, other: Money) -> Money {
        Money(self.0.saturating_add(other.0))
    }

    /// Line total: unit price times quantity.
    pub const fn times(self, quantity: u32) -> Money {
        Money(self.0.saturating_mul(quantity as u64))
    }
}

impl ValueObject for Money {}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "${}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl core::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Money::saturating_add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_as_dollars_and_cents() {
        assert_eq!(Money::from_cents(1999).to_string(), "$19.99");
        assert_eq!(Money::from_units(10).to_string(), "$10.00");
        assert_eq!(Money::ZERO.to_string(), "$0.00");
        assert_eq!(Money::from_cents(5).to_string(), "$0.05");
    }

    #[test]
    fn unit_rounding_floors_and_ceils() {
        let price = Money::from_cents(4999);
        assert_eq!(price.units_floor(), 49);
        assert_eq!(price.units_ceil(), 50);
        assert_eq!(Money::from_units(20).units_ceil(), 20);
    }

    #[test]
    fn times_and_sum_accumulate() {
        let subtotal: Money = [Money::from_cents(1000).times(3), Money::from_cents(500)]
            .into_iter()
            .sum();
        assert_eq!(subtotal, Money::from_cents(3500));
    }
}
