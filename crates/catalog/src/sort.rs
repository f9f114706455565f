//! Catalog ordering (the "Sort by" control).

use serde::{Deserialize, Serialize};

use crate::product::Product;

/// How the visible catalog is ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Source order, i.e. whatever the catalog source considers featured.
    #[default]
    Featured,
    PriceAsc,
    PriceDesc,
    Newest,
}

/// Sort `products` by `key`. Stable, so products with equal keys keep their
/// source order.
pub fn sort_products(products: &mut [Product], key: SortKey) {
    match key {
        SortKey::Featured => {}
        SortKey::PriceAsc => products.sort_by_key(|p| p.price()),
        SortKey::PriceDesc => products.sort_by(|a, b| b.price().cmp(&a.price())),
        SortKey::Newest => products.sort_by(|a, b| b.created_at().cmp(&a.created_at())),
    }
}
