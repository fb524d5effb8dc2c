//! Fixtures

use std::{fs, path::PathBuf};

use thiserror::Error;

use crate::{
    fixtures::{products::ProductsFixture, promotions::PromotionsFixture},
    products::Product,
    promotions::{ApplicabilityError, Promotion},
};

pub mod products;
pub mod promotions;

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid promotion target
    #[error("Invalid promotion target in {0}: {1}")]
    InvalidTarget(String, ApplicabilityError),

    /// Product not found
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Promotion not found
    #[error("Promotion not found: {0}")]
    PromotionNotFound(String),
}

/// Fixture
///
/// Products and promotions loaded from YAML, kept in file order so stacking
/// order in tests matches what is written.
#[derive(Debug)]
pub struct Fixture {
    /// Base path for fixture files
    base_path: PathBuf,

    products: Vec<Product>,

    promotions: Vec<Promotion>,
}

impl Fixture {
    /// Create a new empty fixture with default base path
    pub fn new() -> Self {
        Self::with_base_path("./fixtures")
    }

    /// Create a new empty fixture with custom base path
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            products: Vec::new(),
            promotions: Vec::new(),
        }
    }

    /// Load products from `products/<name>.yml`
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_products(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let file_path = self.base_path.join("products").join(format!("{name}.yml"));
        let contents = fs::read_to_string(&file_path)?;

        self.add_products_yaml(&contents)
    }

    /// Load promotions from `promotions/<name>.yml`
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if a promotion target is invalid.
    pub fn load_promotions(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let file_path = self
            .base_path
            .join("promotions")
            .join(format!("{name}.yml"));

        let contents = fs::read_to_string(&file_path)?;

        self.add_promotions_yaml(&contents)
    }

    /// Append products parsed from a YAML document.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML cannot be parsed.
    pub fn add_products_yaml(&mut self, yaml: &str) -> Result<&mut Self, FixtureError> {
        let fixture: ProductsFixture = serde_norway::from_str(yaml)?;

        self.products
            .extend(fixture.products.into_iter().map(Product::from));

        Ok(self)
    }

    /// Append promotions parsed from a YAML document.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML cannot be parsed or a promotion target is invalid.
    pub fn add_promotions_yaml(&mut self, yaml: &str) -> Result<&mut Self, FixtureError> {
        let fixture: PromotionsFixture = serde_norway::from_str(yaml)?;

        for promotion in fixture.promotions {
            self.promotions.push(promotion.try_into()?);
        }

        Ok(self)
    }

    /// Load a complete fixture set (products and promotions with the same name)
    ///
    /// # Errors
    ///
    /// Returns an error if any of the fixture files cannot be loaded.
    pub fn from_set(name: &str) -> Result<Self, FixtureError> {
        let mut fixture = Self::new();

        fixture.load_products(name)?.load_promotions(name)?;

        Ok(fixture)
    }

    /// All loaded products, in file order
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// All loaded promotions, in file order
    pub fn promotions(&self) -> &[Promotion] {
        &self.promotions
    }

    /// Get a product by its id
    ///
    /// # Errors
    ///
    /// Returns an error if the product is not found.
    pub fn product(&self, id: &str) -> Result<&Product, FixtureError> {
        self.products
            .iter()
            .find(|product| product.id == id)
            .ok_or_else(|| FixtureError::ProductNotFound(id.to_string()))
    }

    /// Get a promotion by its id
    ///
    /// # Errors
    ///
    /// Returns an error if the promotion is not found.
    pub fn promotion(&self, id: &str) -> Result<&Promotion, FixtureError> {
        self.promotions
            .iter()
            .find(|promotion| promotion.id == id)
            .ok_or_else(|| FixtureError::PromotionNotFound(id.to_string()))
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}
