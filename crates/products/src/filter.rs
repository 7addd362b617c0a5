//! Filter selection and the visible-subset computation.

use std::collections::BTreeSet;

use crate::catalog::Catalog;
use crate::product::Product;

/// Parse the free text of a price field into a bound.
///
/// Blank text, text that is not a complete decimal number, and non-finite
/// values all mean "no bound": the predicate is switched off rather than the
/// input rejected.
///
/// Unlike lenient prefix parsers, a numeric prefix is not salvaged:
/// `"12abc"` is no bound, not 12.
pub fn parse_price_bound(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Raw text of a price field, as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PriceInput {
    raw: String,
}

impl PriceInput {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn bound(&self) -> Option<f64> {
        parse_price_bound(&self.raw)
    }
}

/// The user's current constraints. `Default` constrains nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSelection {
    category: Option<String>,
    brands: BTreeSet<String>,
    min_price: PriceInput,
    max_price: PriceInput,
}

impl FilterSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn brands(&self) -> &BTreeSet<String> {
        &self.brands
    }

    pub fn min_price(&self) -> &PriceInput {
        &self.min_price
    }

    pub fn max_price(&self) -> &PriceInput {
        &self.max_price
    }

    /// Select a category. `None` and the empty string both clear the constraint.
    pub fn set_category(&mut self, category: Option<String>) {
        self.category = category.filter(|c| !c.is_empty());
    }

    /// Add the brand if absent, remove it if present. Returns whether it is now selected.
    pub fn toggle_brand(&mut self, brand: &str) -> bool {
        if self.brands.remove(brand) {
            false
        } else {
            self.brands.insert(brand.to_owned());
            true
        }
    }

    pub fn set_min_price(&mut self, raw: impl Into<String>) {
        self.min_price = PriceInput::new(raw);
    }

    pub fn set_max_price(&mut self, raw: impl Into<String>) {
        self.max_price = PriceInput::new(raw);
    }

    /// True when no predicate is active (unparseable price text counts as inactive).
    pub fn is_unconstrained(&self) -> bool {
        self.category.is_none()
            && self.brands.is_empty()
            && self.min_price.bound().is_none()
            && self.max_price.bound().is_none()
    }

    /// All active predicates, combined with AND. Inactive ones pass everything.
    pub fn matches(&self, product: &Product) -> bool {
        Predicates::from_selection(self).matches(product)
    }
}

/// A selection with its price text parsed, so a scan parses each bound once.
struct Predicates<'a> {
    category: Option<&'a str>,
    brands: &'a BTreeSet<String>,
    min: Option<f64>,
    max: Option<f64>,
}

impl<'a> Predicates<'a> {
    fn from_selection(selection: &'a FilterSelection) -> Self {
        Self {
            category: selection.category(),
            brands: &selection.brands,
            min: selection.min_price.bound(),
            max: selection.max_price.bound(),
        }
    }

    fn matches(&self, product: &Product) -> bool {
        let price = product.price().as_dollars();

        self.category
            .is_none_or(|category| product.category() == category)
            && (self.brands.is_empty() || self.brands.contains(product.brand()))
            && self.min.is_none_or(|min| price >= min)
            && self.max.is_none_or(|max| price <= max)
    }
}

/// The products of `catalog` that satisfy `selection`, in catalog order.
pub fn compute_visible(catalog: &Catalog, selection: &FilterSelection) -> Vec<Product> {
    let predicates = Predicates::from_selection(selection);
    catalog
        .iter()
        .filter(|product| predicates.matches(product))
        .cloned()
        .collect()
}
