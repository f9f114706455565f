//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**: two filter specs
/// with the same selections are the same filter, two amounts of the same cents
/// are the same money. Entities (products, cart lines) are compared by id
/// instead; see [`crate::Entity`].
///
/// The bounds keep value objects cheap to copy, comparable, and debuggable.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
