//! Petalo prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    catalog::{CatalogFilter, PricedProduct, category_filters, price_catalog, promoted_products},
    discounts::{DiscountError, apply_discount, stack_discounts},
    fixtures::{Fixture, FixtureError},
    pricing::{
        AppliedPromotions, PriceBreakdown, PricingError, applicable_promotions,
        compute_final_price, price_product,
    },
    products::{Category, Product, ProductKind, UnknownProductKind},
    promotions::prelude::*,
};
