//! Shipping policy and order summary totals.

use serde::{Deserialize, Serialize};

use selvedge_core::{Money, ValueObject};

/// How shipping is charged.
///
/// The storefront charges one flat fee whenever there is anything to ship;
/// an empty cart ships nothing and costs nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingPolicy {
    pub flat_fee: Money,
}

impl ShippingPolicy {
    pub const fn flat(fee: Money) -> Self {
        Self { flat_fee: fee }
    }

    /// Shipping charge for a given subtotal.
    pub fn charge(&self, subtotal: Money) -> Money {
        if subtotal.is_zero() {
            Money::ZERO
        } else {
            self.flat_fee
        }
    }
}

impl Default for ShippingPolicy {
    /// The storefront's flat $10.00.
    fn default() -> Self {
        Self::flat(Money::from_units(10))
    }
}

impl ValueObject for ShippingPolicy {}

/// Order summary: subtotal, shipping, total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartTotals {
    pub subtotal: Money,
    pub shipping: Money,
    pub total: Money,
}

impl CartTotals {
    pub fn compute(subtotal: Money, policy: &ShippingPolicy) -> CartTotals {
        let shipping = policy.charge(subtotal);
        CartTotals {
            subtotal,
            shipping,
            total: subtotal.saturating_add(shipping),
        }
    }
}

impl ValueObject for CartTotals {}
