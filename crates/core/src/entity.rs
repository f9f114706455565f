//! Entity trait: identity + continuity across state changes.
//!
//! The storefront's entities are the catalog product and the cart line, both
//! keyed by [`crate::ProductId`]: a line keeps its identity while its
//! quantity changes, a product keeps its identity across catalog snapshots.
//! Compare by id; compare value objects ([`crate::Money`], filter specs) by
//! value instead.

/// Entity marker + minimal interface.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
