//! Cart line items.

use serde::{Deserialize, Serialize};

use selvedge_catalog::{Category, Color, Product};
use selvedge_core::{Entity, Money, ProductId};

/// One product entry in the cart.
///
/// Display fields are denormalized at add-time: the cart shows what the
/// shopper saw, even if the catalog snapshot changes underneath. Invariant:
/// `quantity >= 1`; a line that would drop to zero is removed instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: ProductId,
    pub name: String,
    pub price: Money,
    pub image: String,
    pub category: Category,
    pub color: Color,
    pub quantity: u32,
}

impl CartLine {
    /// Capture a catalog product as a new line.
    pub fn capture(product: &Product, quantity: u32) -> CartLine {
        CartLine {
            product_id: product.id().clone(),
            name: product.name().to_owned(),
            price: product.price(),
            image: product.image().to_owned(),
            category: product.category(),
            color: product.color(),
            quantity,
        }
    }

    /// Line total: price times quantity.
    pub fn total(&self) -> Money {
        self.price.times(self.quantity)
    }
}

impl Entity for CartLine {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.product_id
    }
}
