//! Catalog domain module.
//!
//! This crate contains business rules for products/catalog browsing,
//! implemented purely as deterministic domain logic (no IO beyond the
//! [`CatalogSource`] port, no HTTP, no storage).

pub mod filter;
pub mod product;
pub mod sort;
pub mod source;

pub use filter::{FilterSpec, PriceBounds, apply_filters};
pub use product::{Category, Color, NewProduct, Product};
pub use sort::{SortKey, sort_products};
pub use source::{CatalogSource, FixtureSource, featured, find_product, load_catalog};
