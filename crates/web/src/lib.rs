//! `catalog-web`
//!
//! **Responsibility:** the product catalog screen.
//!
//! This crate provides:
//! - A target-independent view model built from a [`catalog_products::FilterEngine`]
//! - The Leptos component that renders it (`wasm32` only)

pub mod view;

#[cfg(target_arch = "wasm32")]
pub mod frontend;

pub use view::{
    ALL_CATEGORIES_LABEL, BrandToggle, CatalogView, CategoryOption, EMPTY_MESSAGE, ProductCard,
    Results, format_currency,
};
