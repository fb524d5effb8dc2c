//! Promotion Fixtures

use jiff::civil::Date;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::{
    fixtures::FixtureError,
    products::ProductKind,
    promotions::{Applicability, DiscountType, Promotion, Schedule},
};

/// Wrapper for promotions in YAML
#[derive(Debug, Deserialize)]
pub struct PromotionsFixture {
    /// Promotions, in stacking order
    pub promotions: Vec<PromotionFixture>,
}

/// Promotion Fixture
#[derive(Debug, Deserialize)]
pub struct PromotionFixture {
    /// Promotion id
    pub id: String,

    /// Display name; defaults to the id
    #[serde(default)]
    pub name: Option<String>,

    /// Description
    #[serde(default)]
    pub description: String,

    /// `percentage`, `fixed`, or anything else for a no-op promotion
    pub discount_type: DiscountType,

    /// Discount value
    pub discount_value: Decimal,

    /// `all`, `flowers`, `jewelry` or `specific_category`
    pub applicable_to: String,

    /// Kind targeted by a category-specific promotion
    #[serde(default)]
    pub product_type: Option<ProductKind>,

    /// Category targeted by a category-specific promotion
    #[serde(default)]
    pub specific_category: Option<String>,

    /// First day, inclusive
    #[serde(default)]
    pub start_date: Option<Date>,

    /// Last day, inclusive
    #[serde(default)]
    pub end_date: Option<Date>,

    /// Manual switch
    #[serde(default = "active_by_default")]
    pub is_active: bool,
}

const fn active_by_default() -> bool {
    true
}

impl TryFrom<PromotionFixture> for Promotion {
    type Error = FixtureError;

    fn try_from(fixture: PromotionFixture) -> Result<Self, Self::Error> {
        let applies_to = Applicability::from_parts(
            &fixture.applicable_to,
            fixture.product_type,
            fixture.specific_category,
        )
        .map_err(|err| FixtureError::InvalidTarget(fixture.id.clone(), err))?;

        let name = fixture.name.unwrap_or_else(|| fixture.id.clone());

        Ok(Promotion::new(
            fixture.id,
            name,
            fixture.discount_type,
            fixture.discount_value,
            applies_to,
        )
        .with_description(fixture.description)
        .with_schedule(Schedule {
            start: fixture.start_date,
            end: fixture.end_date,
        })
        .with_active(fixture.is_active))
    }
}
