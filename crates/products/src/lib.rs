//! Product catalog filtering.
//!
//! This crate holds the immutable product dataset, derives the facet values
//! used to populate filter controls, and computes the visible subset for a
//! filter selection. Everything here is deterministic and synchronous (no IO,
//! no rendering).

pub mod catalog;
pub mod engine;
pub mod facets;
pub mod filter;
pub mod product;

pub use catalog::Catalog;
pub use engine::FilterEngine;
pub use facets::Facets;
pub use filter::{FilterSelection, PriceInput, compute_visible, parse_price_bound};
pub use product::Product;

pub use catalog_core::{CatalogError, CatalogResult, Price, ProductId};
