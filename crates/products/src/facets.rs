//! Facet derivation: the distinct values offered by each filter control.

use std::collections::HashSet;

use crate::catalog::Catalog;

/// Distinct categories and brands present in a catalog, each in order of
/// first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Facets {
    categories: Vec<String>,
    brands: Vec<String>,
}

impl Facets {
    pub fn derive(catalog: &Catalog) -> Self {
        Self {
            categories: distinct(catalog.iter().map(|p| p.category())),
            brands: distinct(catalog.iter().map(|p| p.brand())),
        }
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn brands(&self) -> &[String] {
        &self.brands
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .filter(|value| seen.insert(*value))
        .map(str::to_owned)
        .collect()
}
