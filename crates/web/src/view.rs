//! View model for the catalog screen.
//!
//! Everything the UI shows is derived here from the engine state, so the
//! rendering layer only maps these structs to markup and events to engine
//! calls.

use catalog_core::{Price, ProductId};
use catalog_products::{FilterEngine, Product};

/// Label of the category option that clears the category constraint.
pub const ALL_CATEGORIES_LABEL: &str = "All";

/// Shown in place of the grid when no product matches.
pub const EMPTY_MESSAGE: &str = "No products match the selected filters.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryOption {
    /// Value handed back to the engine; empty for "all categories".
    pub value: String,
    pub label: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrandToggle {
    pub brand: String,
    pub checked: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCard {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub brand: String,
    pub price_label: String,
}

impl From<&Product> for ProductCard {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id_typed(),
            name: product.name().to_string(),
            category: product.category().to_string(),
            brand: product.brand().to_string(),
            price_label: format_currency(product.price()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Results {
    Grid(Vec<ProductCard>),
    Empty { message: &'static str },
}

/// Snapshot of everything the catalog screen displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogView {
    pub category_options: Vec<CategoryOption>,
    pub brand_toggles: Vec<BrandToggle>,
    pub min_price: String,
    pub max_price: String,
    pub results: Results,
}

impl CatalogView {
    pub fn build(engine: &FilterEngine) -> Self {
        let facets = engine.facets();
        let selection = engine.selection();
        let selected_category = selection.category();

        let category_options = std::iter::once(CategoryOption {
            value: String::new(),
            label: ALL_CATEGORIES_LABEL.to_string(),
            selected: selected_category.is_none(),
        })
        .chain(facets.categories().iter().map(|category| CategoryOption {
            value: category.clone(),
            label: category.clone(),
            selected: selected_category == Some(category.as_str()),
        }))
        .collect();

        let brand_toggles = facets
            .brands()
            .iter()
            .map(|brand| BrandToggle {
                brand: brand.clone(),
                checked: selection.brands().contains(brand),
            })
            .collect();

        let results = if engine.is_empty() {
            Results::Empty {
                message: EMPTY_MESSAGE,
            }
        } else {
            Results::Grid(engine.visible().iter().map(ProductCard::from).collect())
        };

        tracing::trace!(visible = engine.visible().len(), "catalog view built");

        Self {
            category_options,
            brand_toggles,
            min_price: selection.min_price().raw().to_string(),
            max_price: selection.max_price().raw().to_string(),
            results,
        }
    }
}

/// Format a price as US dollars with thousands separators, e.g. `$1,999.00`.
pub fn format_currency(price: Price) -> String {
    let digits = price.whole_dollars().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("${grouped}.{:02}", price.cent_part())
}
