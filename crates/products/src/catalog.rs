//! The immutable product dataset.

use std::collections::HashSet;
use std::sync::Arc;

use catalog_core::{CatalogError, CatalogResult, ProductId};

use crate::product::{Product, seed_products};

/// An ordered, immutable sequence of products with unique ids.
///
/// Built once and handed to whoever needs it; clones share the same backing
/// slice, so several engines (or test harnesses) can hold distinct catalogs
/// without any process-wide state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    products: Arc<[Product]>,
}

impl Catalog {
    /// Build a catalog, enforcing id uniqueness and non-blank names, categories and brands.
    pub fn new(products: Vec<Product>) -> CatalogResult<Self> {
        let mut seen: HashSet<ProductId> = HashSet::with_capacity(products.len());
        for product in &products {
            if product.name().trim().is_empty() {
                return Err(CatalogError::validation(format!(
                    "product {} has an empty name",
                    product.id_typed()
                )));
            }
            if product.category().trim().is_empty() {
                return Err(CatalogError::validation(format!(
                    "product {} has an empty category",
                    product.id_typed()
                )));
            }
            if product.brand().trim().is_empty() {
                return Err(CatalogError::validation(format!(
                    "product {} has an empty brand",
                    product.id_typed()
                )));
            }
            if !seen.insert(product.id_typed()) {
                return Err(CatalogError::invariant(format!(
                    "duplicate product id {}",
                    product.id_typed()
                )));
            }
        }

        tracing::debug!(products = products.len(), "catalog built");

        Ok(Self {
            products: products.into(),
        })
    }

    /// Decode a JSON array of product records, then validate it like [`Catalog::new`].
    pub fn from_json(json: &str) -> CatalogResult<Self> {
        let products: Vec<Product> =
            serde_json::from_str(json).map_err(|e| CatalogError::decode(e.to_string()))?;
        Self::new(products)
    }

    /// The built-in six-product seed set.
    pub fn seed() -> Self {
        Self {
            products: seed_products().into(),
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id_typed() == id)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::seed()
    }
}
