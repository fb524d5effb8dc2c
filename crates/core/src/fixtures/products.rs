//! Product Fixtures

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::products::{Product, ProductKind};

/// Wrapper for products in YAML
#[derive(Debug, Deserialize)]
pub struct ProductsFixture {
    /// Products, in listing order
    pub products: Vec<ProductFixture>,
}

/// Product Fixture
#[derive(Debug, Deserialize)]
pub struct ProductFixture {
    /// Product id
    pub id: String,

    /// Product kind (`flowers` or `jewelry`)
    pub kind: ProductKind,

    /// Product name
    pub name: String,

    /// Category name
    pub category: String,

    /// Base price (e.g. `10000` or `"12990.50"`)
    pub price: Decimal,

    /// Image URL
    #[serde(default)]
    pub image_url: Option<String>,

    /// Description
    #[serde(default)]
    pub description: Option<String>,
}

impl From<ProductFixture> for Product {
    fn from(fixture: ProductFixture) -> Self {
        Product {
            id: fixture.id,
            kind: fixture.kind,
            name: fixture.name,
            category: fixture.category,
            price: fixture.price,
            image_url: fixture.image_url,
            description: fixture.description,
        }
    }
}
