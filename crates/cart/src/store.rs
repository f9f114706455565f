//! The persisted cart store.

use selvedge_catalog::Product;
use selvedge_core::{Money, ProductId};
use selvedge_storage::KeyValueStore;

use crate::checkout::OrderConfirmation;
use crate::line::CartLine;
use crate::totals::{CartTotals, ShippingPolicy};

/// Fixed slot key the session's cart is persisted under.
pub const CART_KEY: &str = "cart";

/// The authoritative cart for the current session.
///
/// Holds at most one line per product id. Every mutating operation persists
/// the full line collection into the injected slot; persistence failures are
/// logged, never raised, and the in-memory cart stays the source of truth for
/// the rest of the session.
#[derive(Debug)]
pub struct CartStore<S: KeyValueStore> {
    slot: S,
    lines: Vec<CartLine>,
}

impl<S: KeyValueStore> CartStore<S> {
    /// Rehydrate the cart from `slot`.
    ///
    /// An absent or malformed payload falls back to an empty cart; a shopper
    /// with a corrupted slot starts over rather than seeing an error.
    pub fn load(slot: S) -> Self {
        let lines = match slot.get(CART_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<CartLine>>(&raw) {
                Ok(lines) => lines,
                Err(err) => {
                    tracing::warn!(%err, "cart payload malformed; starting empty");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(err) => {
                tracing::warn!(%err, "cart slot unreadable; starting empty");
                Vec::new()
            }
        };

        Self { slot, lines }
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total units across all lines (the header badge). Saturates like the
    /// quantity arithmetic does.
    pub fn item_count(&self) -> u32 {
        self.lines
            .iter()
            .fold(0u32, |count, l| count.saturating_add(l.quantity))
    }

    /// Add `quantity` units of `product`.
    ///
    /// Merges into the existing line for the same product id, otherwise
    /// appends a new line. No upper bound is enforced; a merge that would
    /// exceed `u32` saturates, following the convention [`Money`] documents.
    /// A zero quantity or a product with an empty id is a caller contract
    /// violation handled as a defensive no-op.
    pub fn add(&mut self, product: &Product, quantity: u32) {
        if quantity == 0 || !product.id_typed().is_valid() {
            return;
        }

        match self.line_mut(product.id_typed()) {
            Some(line) => line.quantity = line.quantity.saturating_add(quantity),
            None => self.lines.push(CartLine::capture(product, quantity)),
        }
        self.persist();
    }

    /// Add a single unit (the "Add to Cart" button).
    pub fn add_one(&mut self, product: &Product) {
        self.add(product, 1);
    }

    /// Set the quantity of the line for `id`.
    ///
    /// A quantity of zero removes the line. The UI never requests it (the
    /// decrement control stops at 1), so zero only arrives programmatically
    /// and removal keeps the `quantity >= 1` line invariant. An unknown id
    /// is a no-op.
    pub fn update_quantity(&mut self, id: &ProductId, quantity: u32) {
        if quantity == 0 {
            self.remove(id);
            return;
        }
        if let Some(line) = self.line_mut(id) {
            line.quantity = quantity;
            self.persist();
        }
    }

    /// Delete the line for `id`; no-op if absent.
    pub fn remove(&mut self, id: &ProductId) {
        let before = self.lines.len();
        self.lines.retain(|l| &l.product_id != id);
        if self.lines.len() != before {
            self.persist();
        }
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.persist();
    }

    /// Sum of price × quantity across all lines. Pure.
    pub fn subtotal(&self) -> Money {
        self.lines.iter().map(CartLine::total).sum()
    }

    /// Order summary under `policy`.
    pub fn totals(&self, policy: &ShippingPolicy) -> CartTotals {
        CartTotals::compute(self.subtotal(), policy)
    }

    /// Complete the mock checkout: snapshot the totals, empty the cart, and
    /// hand back a confirmation. Idempotent on an empty cart (`None`).
    pub fn checkout(&mut self, policy: &ShippingPolicy) -> Option<OrderConfirmation> {
        if self.is_empty() {
            return None;
        }
        let confirmation = OrderConfirmation::place(self.totals(policy), self.item_count());
        self.clear();
        Some(confirmation)
    }

    fn line_mut(&mut self, id: &ProductId) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|l| &l.product_id == id)
    }

    /// Serialize the full line collection into the slot.
    fn persist(&self) {
        let raw = match serde_json::to_string(&self.lines) {
            Ok(raw) => raw,
            Err(err) => {
                tracing::error!(%err, "failed to serialize cart");
                return;
            }
        };
        if let Err(err) = self.slot.put(CART_KEY, &raw) {
            tracing::error!(%err, "failed to persist cart");
        }
    }
}
