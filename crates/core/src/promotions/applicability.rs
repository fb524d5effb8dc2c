//! Promotion Applicability

use std::fmt;

use thiserror::Error;

use crate::products::{Product, ProductKind};

/// Errors raised while assembling an applicability target from stored parts.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApplicabilityError {
    /// The target is not one of `all`, `flowers`, `jewelry` or `specific_category`.
    #[error("unknown promotion target: {0}")]
    UnknownTarget(String),

    /// A category-specific promotion lacks its product type or category.
    #[error("category-specific promotion is missing its product type or category")]
    MissingCategoryTarget,
}

/// Which products a promotion applies to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Applicability {
    /// Every product
    All,

    /// Every product of one kind
    Kind(ProductKind),

    /// Products of one kind whose category name matches exactly
    Category {
        /// Kind the category belongs to
        kind: ProductKind,

        /// Category name
        category: String,
    },
}

impl Applicability {
    /// Build an applicability from its stored parts.
    ///
    /// `product_type` and `category` are only read for `specific_category`.
    ///
    /// # Errors
    ///
    /// - [`ApplicabilityError::UnknownTarget`]: `target` is not a known value.
    /// - [`ApplicabilityError::MissingCategoryTarget`]: a category-specific target lacks its parts.
    pub fn from_parts(
        target: &str,
        product_type: Option<ProductKind>,
        category: Option<String>,
    ) -> Result<Self, ApplicabilityError> {
        match target {
            "all" => Ok(Self::All),
            "flowers" => Ok(Self::Kind(ProductKind::Flowers)),
            "jewelry" => Ok(Self::Kind(ProductKind::Jewelry)),
            "specific_category" => match (product_type, category) {
                (Some(kind), Some(category)) => Ok(Self::Category { kind, category }),
                _ => Err(ApplicabilityError::MissingCategoryTarget),
            },
            other => Err(ApplicabilityError::UnknownTarget(other.to_string())),
        }
    }

    /// Stored name of the target.
    pub const fn target(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Kind(kind) => kind.as_str(),
            Self::Category { .. } => "specific_category",
        }
    }

    /// Whether a product of `kind` in `category` is covered.
    ///
    /// Category names are compared exactly, without trimming or case folding.
    pub fn matches(&self, kind: ProductKind, category: &str) -> bool {
        match self {
            Self::All => true,
            Self::Kind(target) => *target == kind,
            Self::Category {
                kind: target,
                category: target_category,
            } => *target == kind && target_category == category,
        }
    }

    /// Whether `product` is covered.
    pub fn covers(&self, product: &Product) -> bool {
        self.matches(product.kind, &product.category)
    }
}

impl fmt::Display for Applicability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Category { kind, category } => write!(f, "{kind}/{category}"),
            other => f.write_str(other.target()),
        }
    }
}
