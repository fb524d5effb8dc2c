//! Products

use std::{fmt, str::FromStr};

use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Raised when a product kind cannot be parsed.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown product kind: {0}")]
pub struct UnknownProductKind(pub String);

/// Product kind
///
/// The catalog axis a product belongs to, distinct from its free-text category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductKind {
    /// Flowers and arrangements
    Flowers,

    /// Jewelry
    Jewelry,
}

impl ProductKind {
    /// Every product kind, in catalog order.
    pub const ALL: [ProductKind; 2] = [ProductKind::Flowers, ProductKind::Jewelry];

    /// Stored representation of the kind.
    pub const fn as_str(self) -> &'static str {
        match self {
            ProductKind::Flowers => "flowers",
            ProductKind::Jewelry => "jewelry",
        }
    }
}

impl fmt::Display for ProductKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProductKind {
    type Err = UnknownProductKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "flowers" => Ok(ProductKind::Flowers),
            "jewelry" => Ok(ProductKind::Jewelry),
            other => Err(UnknownProductKind(other.to_string())),
        }
    }
}

/// Product
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    /// Store-assigned identifier
    pub id: String,

    /// Product kind
    pub kind: ProductKind,

    /// Product name
    pub name: String,

    /// Category name; a soft reference that may dangle.
    pub category: String,

    /// Base price in the shop currency
    pub price: Decimal,

    /// Image URL
    pub image_url: Option<String>,

    /// Product description
    pub description: Option<String>,
}

impl Product {
    /// Create a product with no image or description.
    pub fn new(
        id: impl Into<String>,
        kind: ProductKind,
        name: impl Into<String>,
        category: impl Into<String>,
        price: Decimal,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            name: name.into(),
            category: category.into(),
            price,
            image_url: None,
            description: None,
        }
    }
}

/// Product category
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    /// Store-assigned identifier
    pub id: String,

    /// Kind of products this category groups
    pub kind: ProductKind,

    /// Category name, matched exactly against `Product::category`
    pub name: String,

    /// Creation time, when recorded
    pub created_at: Option<Timestamp>,
}
