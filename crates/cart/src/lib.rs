//! Cart domain module.
//!
//! The authoritative, persisted list of line items for the current shopping
//! session, plus derived totals and the mock checkout. State lives behind an
//! injected [`selvedge_storage::KeyValueStore`] slot so the whole crate is
//! exercised against the in-memory fake in tests.

pub mod checkout;
pub mod line;
pub mod store;
pub mod totals;

pub use checkout::OrderConfirmation;
pub use line::CartLine;
pub use store::{CART_KEY, CartStore};
pub use totals::{CartTotals, ShippingPolicy};
