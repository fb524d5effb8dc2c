//! Catalog Models

use petalo::{
    catalog::PricedProduct,
    products::Product,
    promotions::{DiscountType, Promotion},
};
use rust_decimal::Decimal;

/// Promotion summary shown next to a discounted product.
#[derive(Debug, Clone, PartialEq)]
pub struct AppliedPromotion {
    pub id: String,
    pub name: String,
    pub discount_type: DiscountType,
    pub discount_value: Decimal,
}

impl From<&Promotion> for AppliedPromotion {
    fn from(promotion: &Promotion) -> Self {
        Self {
            id: promotion.id.clone(),
            name: promotion.name.clone(),
            discount_type: promotion.discount_type,
            discount_value: promotion.discount_value,
        }
    }
}

/// A product as a catalog or offers page shows it.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    pub product: Product,
    pub original_price: Decimal,
    pub final_price: Decimal,
    pub discount: Decimal,
    pub discount_percentage: Decimal,
    pub has_discount: bool,
    pub applied_promotions: Vec<AppliedPromotion>,
}

impl Listing {
    /// Discount percentage with one decimal place, e.g. `"20.0"`.
    #[must_use]
    pub fn discount_percentage_label(&self) -> String {
        format!("{:.1}", self.discount_percentage)
    }
}

impl From<PricedProduct<'_>> for Listing {
    fn from(priced: PricedProduct<'_>) -> Self {
        let pricing = priced.pricing;

        Self {
            product: priced.product.clone(),
            original_price: pricing.original_price,
            final_price: pricing.final_price,
            discount: pricing.discount,
            discount_percentage: pricing.discount_percentage,
            has_discount: pricing.has_discount,
            applied_promotions: pricing
                .applied_promotions
                .iter()
                .map(|promotion| AppliedPromotion::from(*promotion))
                .collect(),
        }
    }
}
