//! Mock checkout confirmation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use selvedge_core::OrderId;

use crate::totals::CartTotals;

/// What the shopper sees on the success page.
///
/// There is no payment or fulfilment behind this; checkout is the external
/// trigger that empties the cart, and this record is its receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderConfirmation {
    pub order_id: OrderId,
    pub totals: CartTotals,
    pub item_count: u32,
    pub placed_at: DateTime<Utc>,
}

impl OrderConfirmation {
    pub fn place(totals: CartTotals, item_count: u32) -> OrderConfirmation {
        OrderConfirmation {
            order_id: OrderId::new(),
            totals,
            item_count,
            placed_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::totals::{CartTotals, ShippingPolicy};
    use selvedge_core::Money;

    #[test]
    fn confirmations_get_distinct_order_ids() {
        let totals = CartTotals::compute(Money::from_cents(1999), &ShippingPolicy::default());
        let a = OrderConfirmation::place(totals, 1);
        let b = OrderConfirmation::place(totals, 1);
        assert_ne!(a.order_id, b.order_id);
    }

    #[test]
    fn confirmation_round_trips_through_json() {
        let totals = CartTotals::compute(Money::from_cents(1999), &ShippingPolicy::default());
        let placed = OrderConfirmation::place(totals, 3);
        let raw = serde_json::to_string(&placed).unwrap();
        let back: OrderConfirmation = serde_json::from_str(&raw).unwrap();
        assert_eq!(placed, back);
    }
}
