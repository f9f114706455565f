//! Catalog filtering: category, color set, inclusive price range.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use selvedge_core::ValueObject;

use crate::product::{Category, Color, Product};

/// Whole-currency-unit price bounds of a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceBounds {
    pub min: u64,
    pub max: u64,
}

impl PriceBounds {
    /// Range shown before any catalog has loaded.
    pub const DEFAULT: PriceBounds = PriceBounds { min: 0, max: 200 };

    /// Observed bounds of `products`: cheapest price floored, dearest ceiled.
    /// An empty catalog keeps the default slider range.
    pub fn of(products: &[Product]) -> PriceBounds {
        let mut prices = products.iter().map(|p| p.price());
        let Some(first) = prices.next() else {
            return PriceBounds::DEFAULT;
        };

        let (min, max) = prices.fold((first, first), |(lo, hi), price| {
            (lo.min(price), hi.max(price))
        });
        PriceBounds {
            min: min.units_floor(),
            max: max.units_ceil(),
        }
    }
}

impl Default for PriceBounds {
    fn default() -> Self {
        PriceBounds::DEFAULT
    }
}

impl ValueObject for PriceBounds {}

/// The shopper's current filter selections.
///
/// Category is single-select, colors multi-select, and the price range is
/// always applied (a fresh spec spans the full observed range, so it passes
/// everything). Invariant: `min_price <= max_price`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSpec {
    pub category: Option<Category>,
    pub colors: BTreeSet<Color>,
    pub min_price: u64,
    pub max_price: u64,
}

impl FilterSpec {
    /// A spec with no selections, spanning `bounds`.
    pub fn within(bounds: PriceBounds) -> FilterSpec {
        FilterSpec {
            category: None,
            colors: BTreeSet::new(),
            min_price: bounds.min,
            max_price: bounds.max,
        }
    }

    /// Single-select toggle: picking the active category deselects it.
    pub fn toggle_category(&mut self, category: Category) {
        self.category = if self.category == Some(category) {
            None
        } else {
            Some(category)
        };
    }

    /// Multi-select toggle: add the color if absent, drop it if present.
    pub fn toggle_color(&mut self, color: Color) {
        if !self.colors.remove(&color) {
            self.colors.insert(color);
        }
    }

    /// Reset selections to none, restoring the slider to `bounds`.
    pub fn clear(&mut self, bounds: PriceBounds) {
        *self = FilterSpec::within(bounds);
    }

    /// Narrow the price range. Callers hand in slider positions; a crossed
    /// pair is reordered to keep `min_price <= max_price` true.
    pub fn set_price_range(&mut self, min: u64, max: u64) {
        if min <= max {
            self.min_price = min;
            self.max_price = max;
        } else {
            self.min_price = max;
            self.max_price = min;
        }
    }

    /// All three predicates ANDed together.
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(category) = self.category {
            if product.category() != category {
                return false;
            }
        }
        if !self.colors.is_empty() && !self.colors.contains(&product.color()) {
            return false;
        }
        // Bounds are whole units; saturate the conversion so a hand-built
        // spec with huge bounds degrades to "passes everything above min"
        // instead of overflowing.
        let cents = product.price().cents();
        cents >= self.min_price.saturating_mul(100) && cents <= self.max_price.saturating_mul(100)
    }
}

impl Default for FilterSpec {
    fn default() -> Self {
        FilterSpec::within(PriceBounds::DEFAULT)
    }
}

impl ValueObject for FilterSpec {}

/// The visible subset of `products` under `spec`, source order preserved.
///
/// Total over well-formed input; an empty result is an expected outcome, not
/// a failure.
pub fn apply_filters(products: &[Product], spec: &FilterSpec) -> Vec<Product> {
    products
        .iter()
        .filter(|p| spec.matches(p))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::tests::catalog;

    #[test]
    fn bounds_floor_min_and_ceil_max() {
        let products = catalog();
        // Fixture prices span $19.99 ..= $54.99.
        let bounds = PriceBounds::of(&products);
        assert_eq!(bounds, PriceBounds { min: 19, max: 55 });
    }

    #[test]
    fn bounds_of_empty_catalog_are_the_default() {
        assert_eq!(PriceBounds::of(&[]), PriceBounds::DEFAULT);
        assert_eq!(PriceBounds::DEFAULT, PriceBounds { min: 0, max: 200 });
    }

    #[test]
    fn default_spec_passes_everything_in_order() {
        let products = catalog();
        let spec = FilterSpec::within(PriceBounds::of(&products));
        assert_eq!(apply_filters(&products, &spec), products);
    }

    #[test]
    fn category_filter_is_exact() {
        let products = catalog();
        let mut spec = FilterSpec::within(PriceBounds::of(&products));
        spec.toggle_category(Category::TShirts);

        let visible = apply_filters(&products, &spec);
        assert!(!visible.is_empty());
        assert!(visible.iter().all(|p| p.category() == Category::TShirts));
    }

    #[test]
    fn color_filter_is_membership() {
        let products = catalog();
        let mut spec = FilterSpec::within(PriceBounds::of(&products));
        spec.toggle_color(Color::Black);
        spec.toggle_color(Color::Blue);

        let visible = apply_filters(&products, &spec);
        assert!(!visible.is_empty());
        assert!(
            visible
                .iter()
                .all(|p| matches!(p.color(), Color::Black | Color::Blue))
        );
    }

    #[test]
    fn price_range_is_inclusive_of_both_bounds() {
        let products = catalog();
        let mut spec = FilterSpec::within(PriceBounds::of(&products));
        // $39.99 hoodie sits inside [39, 40] after unit conversion.
        spec.set_price_range(39, 40);

        let visible = apply_filters(&products, &spec);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name(), "Gray Hoodie");
    }

    #[test]
    fn predicates_combine_with_and() {
        let products = catalog();
        let mut spec = FilterSpec::within(PriceBounds::of(&products));
        spec.toggle_category(Category::Jeans);
        spec.toggle_color(Color::Black);

        let visible = apply_filters(&products, &spec);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name(), "Black Skinny Jeans");
    }

    #[test]
    fn empty_result_is_a_valid_outcome() {
        let products = catalog();
        let mut spec = FilterSpec::within(PriceBounds::of(&products));
        spec.set_price_range(0, 1);
        assert!(apply_filters(&products, &spec).is_empty());
    }

    #[test]
    fn toggle_category_twice_restores_the_spec() {
        let mut spec = FilterSpec::default();
        let before = spec.clone();
        spec.toggle_category(Category::Hoodies);
        assert_eq!(spec.category, Some(Category::Hoodies));
        spec.toggle_category(Category::Hoodies);
        assert_eq!(spec, before);
    }

    #[test]
    fn toggle_category_switches_between_categories() {
        let mut spec = FilterSpec::default();
        spec.toggle_category(Category::Hoodies);
        spec.toggle_category(Category::Jeans);
        assert_eq!(spec.category, Some(Category::Jeans));
    }

    #[test]
    fn toggle_color_twice_restores_the_set() {
        let mut spec = FilterSpec::default();
        spec.toggle_color(Color::Red);
        let with_red = spec.clone();
        spec.toggle_color(Color::White);
        spec.toggle_color(Color::White);
        assert_eq!(spec, with_red);
    }

    #[test]
    fn oversized_bounds_pass_everything_without_overflow() {
        let products = catalog();
        let mut spec = FilterSpec::default();
        spec.set_price_range(0, u64::MAX);
        assert_eq!(apply_filters(&products, &spec), products);
    }

    #[test]
    fn crossed_price_range_is_reordered() {
        let mut spec = FilterSpec::default();
        spec.set_price_range(50, 20);
        assert_eq!((spec.min_price, spec.max_price), (20, 50));
    }

    #[test]
    fn clear_restores_the_bounds_spec() {
        let bounds = PriceBounds { min: 19, max: 55 };
        let mut spec = FilterSpec::within(bounds);
        spec.toggle_category(Category::Jeans);
        spec.toggle_color(Color::Blue);
        spec.set_price_range(30, 40);

        spec.clear(bounds);
        assert_eq!(spec, FilterSpec::within(bounds));
    }

    mod properties {
        use super::*;
        use crate::source::FixtureSource;
        use proptest::prelude::*;

        fn arb_spec() -> impl Strategy<Value = FilterSpec> {
            (
                proptest::option::of(proptest::sample::select(Category::ALL.to_vec())),
                proptest::collection::btree_set(
                    proptest::sample::select(Color::ALL.to_vec()),
                    0..=Color::ALL.len(),
                ),
                0u64..80,
                0u64..80,
            )
                .prop_map(|(category, colors, a, b)| {
                    let mut spec = FilterSpec {
                        category,
                        colors,
                        min_price: 0,
                        max_price: 0,
                    };
                    spec.set_price_range(a, b);
                    spec
                })
        }

        proptest! {
            #[test]
            fn apply_filters_is_idempotent(spec in arb_spec()) {
                let products = FixtureSource::seed_products();
                let once = apply_filters(&products, &spec);
                let twice = apply_filters(&once, &spec);
                prop_assert_eq!(once, twice);
            }

            #[test]
            fn output_is_a_subsequence_of_the_input(spec in arb_spec()) {
                let products = FixtureSource::seed_products();
                let visible = apply_filters(&products, &spec);

                let mut cursor = products.iter();
                for item in &visible {
                    prop_assert!(cursor.any(|p| p == item), "filter invented or reordered a product");
                }
            }
        }
    }
}
