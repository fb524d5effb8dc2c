//! Catalog
//!
//! Priced product listings for the catalog and offers pages.

use jiff::Timestamp;

use crate::{
    pricing::{PriceBreakdown, PricingError, price_product},
    products::{Category, Product, ProductKind},
    promotions::Promotion,
};

/// Which products a catalog page shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFilter<'a> {
    /// Every product
    All,

    /// Every product of one kind
    Kind(ProductKind),

    /// Products of one kind in a named category
    Category {
        /// Product kind
        kind: ProductKind,

        /// Category name
        name: &'a str,
    },
}

impl CatalogFilter<'_> {
    /// Whether `product` is shown under this filter.
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Self::All => true,
            Self::Kind(kind) => product.kind == *kind,
            Self::Category { kind, name } => product.kind == *kind && product.category == *name,
        }
    }
}

/// A product together with its price after promotions.
#[derive(Debug, Clone, PartialEq)]
pub struct PricedProduct<'a> {
    /// The product
    pub product: &'a Product,

    /// Its pricing
    pub pricing: PriceBreakdown<'a>,
}

/// Price every product matching `filter`, keeping input order.
///
/// # Errors
///
/// Returns a [`PricingError`] if any product cannot be priced.
pub fn price_catalog<'a>(
    products: &'a [Product],
    promotions: &'a [Promotion],
    now: Timestamp,
    filter: CatalogFilter<'_>,
) -> Result<Vec<PricedProduct<'a>>, PricingError> {
    products
        .iter()
        .filter(|product| filter.matches(product))
        .map(|product| {
            Ok(PricedProduct {
                product,
                pricing: price_product(product, promotions, now)?,
            })
        })
        .collect()
}

/// Price every product and keep only those with at least one applicable promotion.
///
/// `kind` narrows the listing the way the offers page tabs do.
///
/// # Errors
///
/// Returns a [`PricingError`] if any product cannot be priced.
pub fn promoted_products<'a>(
    products: &'a [Product],
    promotions: &'a [Promotion],
    now: Timestamp,
    kind: Option<ProductKind>,
) -> Result<Vec<PricedProduct<'a>>, PricingError> {
    let filter = kind.map_or(CatalogFilter::All, CatalogFilter::Kind);

    let mut priced = price_catalog(products, promotions, now, filter)?;
    priced.retain(|entry| entry.pricing.has_discount);

    Ok(priced)
}

/// Filters offered on a kind's catalog page: the whole kind, then one per category.
pub fn category_filters(categories: &[Category], kind: ProductKind) -> Vec<CatalogFilter<'_>> {
    std::iter::once(CatalogFilter::Kind(kind))
        .chain(
            categories
                .iter()
                .filter(|category| category.kind == kind)
                .map(|category| CatalogFilter::Category {
                    kind,
                    name: &category.name,
                }),
        )
        .collect()
}
