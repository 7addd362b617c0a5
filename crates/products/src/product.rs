use serde::{Deserialize, Serialize};

use catalog_core::{Entity, Price, ProductId};

/// A product record. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    category: String,
    brand: String,
    price: Price,
}

impl Product {
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        category: impl Into<String>,
        brand: impl Into<String>,
        price: Price,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            category: category.into(),
            brand: brand.into(),
            price,
        }
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn price(&self) -> Price {
        self.price
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// The built-in seed set, in display order.
pub(crate) fn seed_products() -> Vec<Product> {
    let row = |id: u32, name: &str, category: &str, brand: &str, dollars: u64| {
        Product::new(
            ProductId::new(id),
            name,
            category,
            brand,
            Price::from_dollars(dollars),
        )
    };

    vec![
        row(1, "iPhone 14", "Electronics", "Apple", 999),
        row(2, "Galaxy S22", "Electronics", "Samsung", 899),
        row(3, "MacBook Pro", "Computers", "Apple", 1999),
        row(4, "Dell XPS 13", "Computers", "Dell", 1199),
        row(5, "Sony WH-1000XM5", "Accessories", "Sony", 399),
        row(6, "Surface Laptop", "Computers", "Microsoft", 1299),
    ]
}
