use storefront_catalog::{Price, Product};

use crate::criteria::{CategoryFilter, FilterCriteria, SortOrder};

/// Derive the displayed product list.
///
/// Runs in two phases:
/// 1. keep products matching the name query and price bounds, then stable-sort
///    them per `sort` (ties keep catalog order);
/// 2. drop products outside the selected category from the sorted list.
///
/// Never fails: an empty catalog or contradictory bounds give an empty view.
pub fn compute_view(catalog: &[Product], filters: &FilterCriteria, sort: SortOrder) -> Vec<Product> {
    let query = filters.name_query.to_lowercase();

    let mut matched: Vec<&Product> = catalog
        .iter()
        .filter(|p| query.is_empty() || p.title.to_lowercase().contains(&query))
        .filter(|p| filters.matches_price(p.price))
        .collect();

    // `sort_by` is stable.
    matched.sort_by(|a, b| sort.compare(a, b));

    // The category pass runs after sorting. Because it only removes
    // elements, the result equals filtering all criteria up front.
    matched
        .into_iter()
        .filter(|p| filters.matches_category(p))
        .cloned()
        .collect()
}

/// Holds the currently selected criteria and derives views from them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewEngine {
    filters: FilterCriteria,
    sort: SortOrder,
}

impl ViewEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_criteria(filters: FilterCriteria, sort: SortOrder) -> Self {
        Self { filters, sort }
    }

    pub fn filters(&self) -> &FilterCriteria {
        &self.filters
    }

    pub fn sort(&self) -> SortOrder {
        self.sort
    }

    pub fn set_name_query(&mut self, query: impl Into<String>) {
        self.filters.name_query = query.into();
        tracing::debug!(name_query = %self.filters.name_query, "view name query set");
    }

    pub fn set_min_price(&mut self, min_price: Price) {
        self.filters.min_price = min_price;
        tracing::debug!(min_price = %min_price, "view min price set");
    }

    pub fn set_max_price(&mut self, max_price: Option<Price>) {
        self.filters.max_price = max_price;
        tracing::debug!(max_price = ?max_price.map(Price::value), "view max price set");
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        tracing::debug!(category = %category, "view category set");
        self.filters.category = category;
    }

    pub fn set_sort(&mut self, sort: SortOrder) {
        self.sort = sort;
        tracing::debug!(sort = %sort, "view sort set");
    }

    /// Restore default criteria.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn compute(&self, catalog: &[Product]) -> Vec<Product> {
        compute_view(catalog, &self.filters, self.sort)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::ProductId;

    fn price(v: f64) -> Price {
        Price::new(v).unwrap()
    }

    fn product(id: u64, price_value: f64, category: &str, title: &str) -> Product {
        Product::new(id, title, category, price(price_value))
    }

    fn ids(view: &[Product]) -> Vec<u64> {
        view.iter().map(|p| p.id.get()).collect()
    }

    fn sample_catalog() -> Vec<Product> {
        vec![
            product(1, 109.95, "men's clothing", "Fjallraven Backpack"),
            product(2, 22.3, "men's clothing", "Mens Casual Premium Slim Fit T-Shirts"),
            product(3, 695.0, "jewelery", "Gold Dragon Bracelet"),
            product(4, 9.99, "jewelery", "Silver Ring"),
            product(5, 64.0, "electronics", "External Hard Drive"),
            product(6, 22.3, "women's clothing", "Blue Shirt"),
        ]
    }

    #[test]
    fn hat_scenario_sorts_ascending_by_price() {
        let catalog = vec![
            product(1, 10.0, "a", "Red Hat"),
            product(2, 5.0, "b", "Blue Hat"),
        ];
        let filters = FilterCriteria {
            name_query: "hat".to_string(),
            min_price: price(0.0),
            max_price: Some(price(1000.0)),
            category: CategoryFilter::All,
        };

        let view = compute_view(&catalog, &filters, SortOrder::PriceAscending);
        assert_eq!(ids(&view), vec![2, 1]);
    }

    #[test]
    fn name_filter_is_case_insensitive() {
        let filters = FilterCriteria {
            name_query: "shirt".to_string(),
            ..FilterCriteria::default()
        };
        let view = compute_view(&sample_catalog(), &filters, SortOrder::Unsorted);
        assert_eq!(ids(&view), vec![2, 6]);

        let upper = FilterCriteria {
            name_query: "SHIRT".to_string(),
            ..FilterCriteria::default()
        };
        assert_eq!(compute_view(&sample_catalog(), &upper, SortOrder::Unsorted), view);
    }

    #[test]
    fn empty_query_matches_everything() {
        let view = compute_view(&sample_catalog(), &FilterCriteria::default(), SortOrder::Unsorted);
        assert_eq!(ids(&view), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn price_ties_keep_catalog_order() {
        let asc = compute_view(&sample_catalog(), &FilterCriteria::default(), SortOrder::PriceAscending);
        assert_eq!(ids(&asc), vec![4, 2, 6, 5, 1, 3]);

        let desc = compute_view(&sample_catalog(), &FilterCriteria::default(), SortOrder::PriceDescending);
        assert_eq!(ids(&desc), vec![3, 1, 5, 2, 6, 4]);
    }

    #[test]
    fn category_pass_keeps_sorted_order() {
        let filters = FilterCriteria {
            category: CategoryFilter::only("jewelery"),
            ..FilterCriteria::default()
        };
        let view = compute_view(&sample_catalog(), &filters, SortOrder::PriceDescending);
        assert_eq!(ids(&view), vec![3, 4]);
    }

    #[test]
    fn unknown_category_yields_empty_view() {
        let filters = FilterCriteria {
            category: CategoryFilter::only("garden"),
            ..FilterCriteria::default()
        };
        assert!(compute_view(&sample_catalog(), &filters, SortOrder::PriceAscending).is_empty());
    }

    #[test]
    fn inverted_price_bounds_yield_empty_view() {
        let filters = FilterCriteria {
            min_price: price(100.0),
            max_price: Some(price(10.0)),
            ..FilterCriteria::default()
        };
        assert!(compute_view(&sample_catalog(), &filters, SortOrder::PriceAscending).is_empty());
    }

    #[test]
    fn empty_catalog_yields_empty_view() {
        assert!(compute_view(&[], &FilterCriteria::default(), SortOrder::PriceAscending).is_empty());
    }

    #[test]
    fn filters_combine_conjunctively() {
        let filters = FilterCriteria {
            name_query: "s".to_string(),
            min_price: price(10.0),
            max_price: Some(price(700.0)),
            category: CategoryFilter::only("men's clothing"),
        };
        let view = compute_view(&sample_catalog(), &filters, SortOrder::PriceAscending);
        assert_eq!(ids(&view), vec![2]);
    }

    #[test]
    fn compute_does_not_touch_the_catalog() {
        let catalog = sample_catalog();
        let before = catalog.clone();
        let _ = compute_view(&catalog, &FilterCriteria::default(), SortOrder::PriceDescending);
        assert_eq!(catalog, before);
    }

    #[test]
    fn engine_setters_drive_the_view() {
        let catalog = sample_catalog();
        let mut engine = ViewEngine::new();
        assert_eq!(engine.compute(&catalog).len(), 6);

        engine.set_name_query("shirt");
        engine.set_sort(SortOrder::PriceDescending);
        engine.set_max_price(Some(price(22.3)));
        engine.set_category(CategoryFilter::only("women's clothing"));
        assert_eq!(ids(&engine.compute(&catalog)), vec![6]);

        engine.set_min_price(price(50.0));
        assert!(engine.compute(&catalog).is_empty());

        engine.reset();
        assert_eq!(engine, ViewEngine::new());
        assert_eq!(engine.compute(&catalog).first().map(|p| p.id), Some(ProductId(4)));
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn catalog_strategy() -> impl Strategy<Value = Vec<Product>> {
            prop::collection::vec(
                (
                    0u32..500,
                    prop::sample::select(vec!["a", "b", "c"]),
                    "[A-Za-z ]{0,12}",
                ),
                0..40,
            )
            .prop_map(|rows| {
                rows.into_iter()
                    .enumerate()
                    .map(|(i, (cents, category, title))| {
                        product(i as u64, f64::from(cents) / 100.0, category, &title)
                    })
                    .collect()
            })
        }

        fn criteria_strategy() -> impl Strategy<Value = FilterCriteria> {
            (
                "[a-z]{0,2}",
                0u32..300,
                prop::option::of(0u32..600),
                prop::sample::select(vec!["all", "a", "b", "z"]),
            )
                .prop_map(|(query, min, max, category)| FilterCriteria {
                    name_query: query,
                    min_price: price(f64::from(min) / 100.0),
                    max_price: max.map(|m| price(f64::from(m) / 100.0)),
                    category: CategoryFilter::from(category),
                })
        }

        fn sort_strategy() -> impl Strategy<Value = SortOrder> {
            prop::sample::select(vec![
                SortOrder::PriceAscending,
                SortOrder::PriceDescending,
                SortOrder::Unsorted,
            ])
        }

        proptest! {
            /// Property: identical inputs give identical output.
            #[test]
            fn compute_view_is_idempotent(
                catalog in catalog_strategy(),
                filters in criteria_strategy(),
                sort in sort_strategy()
            ) {
                let first = compute_view(&catalog, &filters, sort);
                let second = compute_view(&catalog, &filters, sort);
                prop_assert_eq!(first, second);
            }

            /// Property: every product in the view satisfies every criterion.
            #[test]
            fn view_only_contains_matching_products(
                catalog in catalog_strategy(),
                filters in criteria_strategy(),
                sort in sort_strategy()
            ) {
                let query = filters.name_query.to_lowercase();
                for p in compute_view(&catalog, &filters, sort) {
                    prop_assert!(p.title.to_lowercase().contains(&query));
                    prop_assert!(filters.matches_price(p.price));
                    prop_assert!(filters.matches_category(&p));
                }
            }

            /// Property: unsorted view preserves catalog order.
            #[test]
            fn unsorted_preserves_catalog_order(
                catalog in catalog_strategy(),
                filters in criteria_strategy()
            ) {
                let view = compute_view(&catalog, &filters, SortOrder::Unsorted);
                let positions: Vec<u64> = view.iter().map(|p| p.id.get()).collect();
                let mut sorted = positions.clone();
                sorted.sort_unstable();
                prop_assert_eq!(positions, sorted);
            }

            /// Property: with distinct prices, descending is the exact reverse of ascending.
            #[test]
            fn descending_reverses_ascending_without_ties(
                prices in prop::collection::btree_set(0u32..10_000, 0..30),
                filters in criteria_strategy()
            ) {
                // Shuffle-free but non-monotonic catalog order.
                let mut values: Vec<u32> = prices.into_iter().collect();
                values.reverse();
                let catalog: Vec<Product> = values
                    .iter()
                    .enumerate()
                    .map(|(i, cents)| product(i as u64, f64::from(*cents) / 100.0, "a", "item"))
                    .collect();

                let asc = compute_view(&catalog, &filters, SortOrder::PriceAscending);
                let mut desc = compute_view(&catalog, &filters, SortOrder::PriceDescending);
                desc.reverse();
                prop_assert_eq!(asc, desc);
            }

            /// Property: ascending output is ordered by price and ties keep catalog order.
            #[test]
            fn ascending_is_stable(
                catalog in catalog_strategy(),
                filters in criteria_strategy()
            ) {
                let view = compute_view(&catalog, &filters, SortOrder::PriceAscending);
                for pair in view.windows(2) {
                    let (a, b) = (&pair[0], &pair[1]);
                    prop_assert!(a.price.value() <= b.price.value());
                    if a.price == b.price {
                        prop_assert!(a.id < b.id);
                    }
                }
            }
        }
    }
}
