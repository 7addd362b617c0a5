//! Stateful filter engine: the selection plus the subset it currently shows.

use crate::catalog::Catalog;
use crate::facets::Facets;
use crate::filter::{FilterSelection, compute_visible};
use crate::product::Product;

/// Owns a catalog and the current filter selection, and keeps the visible
/// subset in step with it.
///
/// Every mutator changes exactly one field of the selection and recomputes
/// the visible subset before returning, so callers never observe a stale
/// result.
#[derive(Debug, Clone)]
pub struct FilterEngine {
    catalog: Catalog,
    selection: FilterSelection,
    visible: Vec<Product>,
}

impl FilterEngine {
    pub fn new(catalog: Catalog) -> Self {
        let selection = FilterSelection::default();
        let visible = compute_visible(&catalog, &selection);
        Self {
            catalog,
            selection,
            visible,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Facets are derived from the catalog on every call.
    pub fn facets(&self) -> Facets {
        Facets::derive(&self.catalog)
    }

    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    pub fn visible(&self) -> &[Product] {
        &self.visible
    }

    /// True when the current selection matches no product.
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    pub fn set_category(&mut self, category: Option<String>) {
        self.selection.set_category(category);
        self.recompute();
    }

    pub fn toggle_brand(&mut self, brand: &str) {
        self.selection.toggle_brand(brand);
        self.recompute();
    }

    pub fn set_min_price(&mut self, raw: impl Into<String>) {
        self.selection.set_min_price(raw);
        self.recompute();
    }

    pub fn set_max_price(&mut self, raw: impl Into<String>) {
        self.selection.set_max_price(raw);
        self.recompute();
    }

    /// Clear every constraint.
    pub fn reset(&mut self) {
        tracing::info!("filters reset");
        self.selection = FilterSelection::default();
        self.recompute();
    }

    fn recompute(&mut self) {
        self.visible = compute_visible(&self.catalog, &self.selection);
        tracing::debug!(
            category = ?self.selection.category(),
            brands = ?self.selection.brands(),
            min_price = ?self.selection.min_price().bound(),
            max_price = ?self.selection.max_price().bound(),
            visible = self.visible.len(),
            total = self.catalog.len(),
            "visible products recomputed"
        );
    }
}

impl Default for FilterEngine {
    fn default() -> Self {
        Self::new(Catalog::seed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_core::{Price, ProductId};
    use proptest::prelude::*;

    fn visible_names(engine: &FilterEngine) -> Vec<&str> {
        engine.visible().iter().map(Product::name).collect()
    }

    const ALL_SEED: [&str; 6] = [
        "iPhone 14",
        "Galaxy S22",
        "MacBook Pro",
        "Dell XPS 13",
        "Sony WH-1000XM5",
        "Surface Laptop",
    ];

    #[test]
    fn starts_with_full_catalog() {
        let engine = FilterEngine::default();
        assert_eq!(visible_names(&engine), ALL_SEED);
        assert!(engine.selection().is_unconstrained());
    }

    #[test]
    fn category_selection_keeps_order() {
        let mut engine = FilterEngine::default();
        engine.set_category(Some("Computers".to_string()));
        assert_eq!(
            visible_names(&engine),
            ["MacBook Pro", "Dell XPS 13", "Surface Laptop"]
        );
    }

    #[test]
    fn brand_selection() {
        let mut engine = FilterEngine::default();
        engine.toggle_brand("Apple");
        assert_eq!(visible_names(&engine), ["iPhone 14", "MacBook Pro"]);
    }

    #[test]
    fn minimum_price_only() {
        let mut engine = FilterEngine::default();
        engine.set_min_price("1000");
        engine.set_max_price("");
        assert_eq!(
            visible_names(&engine),
            ["MacBook Pro", "Dell XPS 13", "Surface Laptop"]
        );
    }

    #[test]
    fn inverted_range_is_empty_not_an_error() {
        let mut engine = FilterEngine::default();
        engine.set_min_price("2000");
        engine.set_max_price("1000");
        assert!(engine.is_empty());
    }

    #[test]
    fn unparseable_minimum_is_ignored() {
        let mut engine = FilterEngine::default();
        engine.set_min_price("abc");
        assert_eq!(engine.selection().min_price().raw(), "abc");
        assert_eq!(visible_names(&engine), ALL_SEED);

        engine.set_max_price("900");
        let mut expected = FilterEngine::default();
        expected.set_max_price("900");
        assert_eq!(engine.visible(), expected.visible());
    }

    #[test]
    fn reset_after_everything_restores_seed() {
        let mut engine = FilterEngine::default();
        engine.set_category(Some("Computers".to_string()));
        engine.toggle_brand("Apple");
        engine.set_min_price("2000");
        engine.set_max_price("1000");
        assert!(engine.is_empty());

        engine.reset();
        assert_eq!(visible_names(&engine), ALL_SEED);
        assert_eq!(engine.selection(), &FilterSelection::default());
    }

    #[test]
    fn engines_hold_independent_catalogs() {
        let custom = Catalog::new(vec![Product::new(
            ProductId::new(99),
            "Desk Lamp",
            "Home",
            "Acme",
            Price::from_dollars(45),
        )])
        .unwrap();
        let mut a = FilterEngine::new(custom);
        let b = FilterEngine::default();

        a.set_category(Some("Home".to_string()));
        assert_eq!(visible_names(&a), ["Desk Lamp"]);
        assert_eq!(a.facets().brands(), ["Acme"]);
        assert_eq!(b.visible().len(), 6);
    }

    #[derive(Debug, Clone)]
    enum Action {
        Category(Option<String>),
        Brand(String),
        Min(String),
        Max(String),
    }

    fn category() -> impl Strategy<Value = Option<String>> {
        prop::option::of(
            prop::sample::select(vec!["Electronics", "Computers", "Accessories", "Toys", ""])
                .prop_map(str::to_owned),
        )
    }

    fn brand() -> impl Strategy<Value = String> {
        prop::sample::select(vec!["Apple", "Samsung", "Dell", "Sony", "Microsoft", "Lego"])
            .prop_map(str::to_owned)
    }

    fn price_text() -> impl Strategy<Value = String> {
        prop_oneof![
            Just(String::new()),
            "[0-9]{1,4}",
            "[0-9]{1,4}\\.[0-9]{1,2}",
            "[a-z]{1,3}",
        ]
    }

    fn action() -> impl Strategy<Value = Action> {
        prop_oneof![
            category().prop_map(Action::Category),
            brand().prop_map(Action::Brand),
            price_text().prop_map(Action::Min),
            price_text().prop_map(Action::Max),
        ]
    }

    fn apply(engine: &mut FilterEngine, action: &Action) {
        match action {
            Action::Category(c) => engine.set_category(c.clone()),
            Action::Brand(b) => engine.toggle_brand(b),
            Action::Min(raw) => engine.set_min_price(raw.clone()),
            Action::Max(raw) => engine.set_max_price(raw.clone()),
        }
    }

    fn is_subsequence(sub: &[Product], full: &[Product]) -> bool {
        let mut rest = full.iter();
        sub.iter().all(|wanted| rest.any(|p| p == wanted))
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: whatever the selection, the visible products appear in
        /// catalog order and all satisfy the selection.
        #[test]
        fn visible_is_an_ordered_subsequence(actions in prop::collection::vec(action(), 0..12)) {
            let mut engine = FilterEngine::default();
            for action in &actions {
                apply(&mut engine, action);
            }

            prop_assert!(is_subsequence(engine.visible(), engine.catalog().products()));
            prop_assert!(engine.visible().iter().all(|p| engine.selection().matches(p)));
        }

        /// Property: recomputation is a pure function of catalog and selection.
        #[test]
        fn recomputation_is_idempotent(actions in prop::collection::vec(action(), 0..12)) {
            let mut engine = FilterEngine::default();
            for action in &actions {
                apply(&mut engine, action);
            }

            let once = compute_visible(engine.catalog(), engine.selection());
            let twice = compute_visible(engine.catalog(), engine.selection());
            prop_assert_eq!(&once, &twice);
            prop_assert_eq!(once.as_slice(), engine.visible());
        }

        /// Property: reset from any state shows the whole catalog again.
        #[test]
        fn reset_restores_full_catalog(actions in prop::collection::vec(action(), 0..12)) {
            let mut engine = FilterEngine::default();
            for action in &actions {
                apply(&mut engine, action);
            }

            engine.reset();
            prop_assert_eq!(engine.visible(), engine.catalog().products());
            prop_assert!(engine.selection().is_unconstrained());
        }

        /// Property: toggling a brand twice leaves the brand set unchanged.
        #[test]
        fn toggling_a_brand_twice_is_a_no_op(
            actions in prop::collection::vec(action(), 0..12),
            brand in brand(),
        ) {
            let mut engine = FilterEngine::default();
            for action in &actions {
                apply(&mut engine, action);
            }

            let before = engine.selection().brands().clone();
            let visible_before = engine.visible().to_vec();
            engine.toggle_brand(&brand);
            engine.toggle_brand(&brand);
            prop_assert_eq!(engine.selection().brands(), &before);
            prop_assert_eq!(engine.visible(), visible_before.as_slice());
        }
    }
}
