//! The catalog source port and snapshot helpers.

use chrono::{DateTime, TimeDelta, Utc};

use selvedge_core::{DomainResult, Entity, Money, ProductId};

use crate::product::{Category, Color, NewProduct, Product};

/// Supplies a point-in-time snapshot of the full catalog.
///
/// The filter layer never subscribes to live updates; it refetches when the
/// shopper reloads. Implementations are free to hit a database or a remote
/// API; this workspace ships only the fixture source.
pub trait CatalogSource {
    fn fetch_all(&self) -> DomainResult<Vec<Product>>;
}

/// Load a catalog snapshot, degrading a source failure to an empty
/// collection. Downstream filtering then yields an empty visible set, which
/// is a valid state rather than an exceptional one.
pub fn load_catalog<S: CatalogSource>(source: &S) -> Vec<Product> {
    match source.fetch_all() {
        Ok(products) => products,
        Err(err) => {
            tracing::warn!(%err, "catalog fetch failed; showing empty catalog");
            Vec::new()
        }
    }
}

/// The storefront's featured strip: the first `n` products of the snapshot.
pub fn featured(products: &[Product], n: usize) -> &[Product] {
    &products[..products.len().min(n)]
}

/// Point lookup by id (product detail page).
pub fn find_product<'a>(products: &'a [Product], id: &ProductId) -> Option<&'a Product> {
    products.iter().find(|p| p.id() == id)
}

/// In-memory catalog source seeded with the demo products.
#[derive(Debug, Default)]
pub struct FixtureSource;

impl FixtureSource {
    /// The six seed products, in seed order.
    pub fn seed_products() -> Vec<Product> {
        let seed: [(&str, &str, &str, u64, Category, Color); 6] = [
            (
                "1",
                "Classic Black T-Shirt",
                "A comfortable and versatile black t-shirt made from 100% cotton.",
                1999,
                Category::TShirts,
                Color::Black,
            ),
            (
                "2",
                "Blue Denim Jeans",
                "Stylish blue jeans with a modern fit, perfect for any casual occasion.",
                4999,
                Category::Jeans,
                Color::Blue,
            ),
            (
                "3",
                "Gray Hoodie",
                "A warm and cozy hoodie for those chilly days, featuring a kangaroo pocket.",
                3999,
                Category::Hoodies,
                Color::Gray,
            ),
            (
                "4",
                "White Graphic T-Shirt",
                "A stylish white t-shirt with a unique graphic design on the front.",
                2499,
                Category::TShirts,
                Color::White,
            ),
            (
                "5",
                "Black Skinny Jeans",
                "Sleek black skinny jeans that provide both comfort and style.",
                5499,
                Category::Jeans,
                Color::Black,
            ),
            (
                "6",
                "Red Zip-Up Hoodie",
                "A vibrant red hoodie with a full-length zipper and adjustable hood.",
                4499,
                Category::Hoodies,
                Color::Red,
            ),
        ];

        seed.into_iter()
            .enumerate()
            .filter_map(|(i, (id, name, description, cents, category, color))| {
                let draft = NewProduct {
                    name: name.into(),
                    description: description.into(),
                    price: Money::from_cents(cents),
                    category,
                    color,
                    image: "/placeholder.svg?height=300&width=300".into(),
                    created_at: seed_time(i as i64),
                };
                // The seed rows are well-formed; a row failing validation
                // would only mean a typo above, and is dropped.
                draft.build(ProductId::new(id)).ok()
            })
            .collect()
    }
}

/// Deterministic, strictly increasing creation times for the seed rows.
fn seed_time(row: i64) -> DateTime<Utc> {
    DateTime::<Utc>::UNIX_EPOCH + TimeDelta::days(20_000 + row)
}

impl CatalogSource for FixtureSource {
    fn fetch_all(&self) -> DomainResult<Vec<Product>> {
        Ok(Self::seed_products())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use selvedge_core::DomainError;

    /// Shared fixture for the crate's tests.
    pub(crate) fn catalog() -> Vec<Product> {
        FixtureSource::seed_products()
    }

    struct BrokenSource;

    impl CatalogSource for BrokenSource {
        fn fetch_all(&self) -> DomainResult<Vec<Product>> {
            Err(DomainError::catalog_unavailable("connection refused"))
        }
    }

    #[test]
    fn fixture_source_yields_the_seed_in_order() {
        let products = load_catalog(&FixtureSource);
        assert_eq!(products.len(), 6);
        assert_eq!(products[0].name(), "Classic Black T-Shirt");
        assert_eq!(products[5].name(), "Red Zip-Up Hoodie");
    }

    #[test]
    fn source_failure_degrades_to_empty_catalog() {
        assert!(load_catalog(&BrokenSource).is_empty());
    }

    #[test]
    fn featured_takes_the_first_three() {
        let products = catalog();
        let strip = featured(&products, 3);
        assert_eq!(strip.len(), 3);
        assert_eq!(strip[0].id_typed().as_str(), "1");
        assert_eq!(strip[2].id_typed().as_str(), "3");
    }

    #[test]
    fn featured_is_clamped_to_the_catalog_size() {
        let products = catalog();
        assert_eq!(featured(&products, 100).len(), 6);
        assert!(featured(&[], 3).is_empty());
    }

    #[test]
    fn find_product_by_id() {
        let products = catalog();
        let jeans = find_product(&products, &ProductId::new("2")).unwrap();
        assert_eq!(jeans.name(), "Blue Denim Jeans");
        assert!(find_product(&products, &ProductId::new("missing")).is_none());
    }

    #[test]
    fn seed_creation_times_strictly_increase() {
        let products = catalog();
        assert!(
            products
                .windows(2)
                .all(|w| w[0].created_at() < w[1].created_at())
        );
    }
}
