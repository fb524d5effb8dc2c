//! Pricing
//!
//! Resolves which live promotions apply to a product and what the product
//! costs once all of them are stacked. Every storefront surface prices
//! through [`price_product`], so the rules exist in one place.

use jiff::Timestamp;
use rust_decimal::{Decimal, RoundingStrategy};
use smallvec::SmallVec;
use thiserror::Error;

use crate::{
    discounts::{DiscountError, stack_discounts},
    products::Product,
    promotions::{Promotion, evaluation_date},
};

/// Promotions applied to a single product, in stacking order.
pub type AppliedPromotions<'p> = SmallVec<[&'p Promotion; 4]>;

/// Errors raised while pricing a product.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PricingError {
    /// Discount stacking failed.
    #[error(transparent)]
    Discount(#[from] DiscountError),

    /// Deriving the discount summary overflowed.
    #[error("discount summary overflowed the decimal range")]
    Overflow,
}

/// Price of one product after promotions.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceBreakdown<'p> {
    /// Base price
    pub original_price: Decimal,

    /// Price after every applied promotion, floored at zero
    pub final_price: Decimal,

    /// `original_price - final_price`
    pub discount: Decimal,

    /// Discount as a share of the original price, one decimal place
    pub discount_percentage: Decimal,

    /// Whether any promotion applied
    pub has_discount: bool,

    /// Promotions that applied, in stacking order
    pub applied_promotions: AppliedPromotions<'p>,
}

impl PriceBreakdown<'_> {
    /// The all-zero, no-discount result.
    #[must_use]
    pub fn none() -> Self {
        Self {
            original_price: Decimal::ZERO,
            final_price: Decimal::ZERO,
            discount: Decimal::ZERO,
            discount_percentage: one_decimal_place(Decimal::ZERO),
            has_discount: false,
            applied_promotions: SmallVec::new(),
        }
    }

    /// Discount percentage rendered with one decimal place, e.g. `"20.0"`.
    #[must_use]
    pub fn discount_percentage_label(&self) -> String {
        format!("{:.1}", self.discount_percentage)
    }
}

/// Select the promotions that are live at `now` and cover `product`.
///
/// The result keeps the relative order of `promotions`.
pub fn applicable_promotions<'p>(
    product: &Product,
    promotions: impl IntoIterator<Item = &'p Promotion>,
    now: Timestamp,
) -> AppliedPromotions<'p> {
    let today = evaluation_date(now);

    promotions
        .into_iter()
        .filter(|promotion| promotion.is_live_on(today) && promotion.covers(product))
        .collect()
}

/// Stack `applicable` onto the product price and summarise the result.
///
/// The floor at zero is applied once, after every promotion, so negative
/// intermediate prices carry into later percentage steps. A missing product
/// or a negative price yields [`PriceBreakdown::none`].
///
/// # Errors
///
/// Returns a [`PricingError`] if the arithmetic leaves the decimal range.
pub fn compute_final_price<'p>(
    product: Option<&Product>,
    applicable: AppliedPromotions<'p>,
) -> Result<PriceBreakdown<'p>, PricingError> {
    let Some(original_price) = product
        .map(|product| product.price)
        .filter(|price| !price.is_sign_negative())
    else {
        return Ok(PriceBreakdown::none());
    };

    let final_price =
        stack_discounts(original_price, applicable.iter().copied())?.max(Decimal::ZERO);

    let discount = original_price
        .checked_sub(final_price)
        .ok_or(PricingError::Overflow)?;

    let discount_percentage = if original_price > Decimal::ZERO {
        discount
            .checked_div(original_price)
            .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
            .ok_or(PricingError::Overflow)?
    } else {
        Decimal::ZERO
    };

    Ok(PriceBreakdown {
        original_price,
        final_price,
        discount,
        discount_percentage: one_decimal_place(discount_percentage),
        has_discount: !applicable.is_empty(),
        applied_promotions: applicable,
    })
}

/// Price `product` against every promotion in `promotions` at `now`.
///
/// # Errors
///
/// Returns a [`PricingError`] if the arithmetic leaves the decimal range.
pub fn price_product<'p>(
    product: &Product,
    promotions: impl IntoIterator<Item = &'p Promotion>,
    now: Timestamp,
) -> Result<PriceBreakdown<'p>, PricingError> {
    compute_final_price(
        Some(product),
        applicable_promotions(product, promotions, now),
    )
}

fn one_decimal_place(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(1);
    rounded
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use smallvec::smallvec;
    use testresult::TestResult;

    use crate::{
        products::ProductKind,
        promotions::{Applicability, DiscountType, Schedule},
    };

    use super::*;

    /// 2025-01-15T12:00:00Z
    const NOW: Timestamp = Timestamp::constant(1_736_942_400, 0);

    fn now() -> Timestamp {
        NOW
    }

    fn rose(price: i64) -> Product {
        Product::new("rosa", ProductKind::Flowers, "Rosa roja", "Rosas", Decimal::from(price))
    }

    fn promo(
        id: &str,
        discount_type: DiscountType,
        value: i64,
        applies_to: Applicability,
    ) -> Promotion {
        Promotion::new(id, id, discount_type, Decimal::from(value), applies_to)
    }

    fn ids<'p>(applied: &AppliedPromotions<'p>) -> Vec<&'p str> {
        applied.iter().map(|promotion| promotion.id.as_str()).collect()
    }

    #[test]
    fn twenty_percent_off_everything() -> TestResult {
        let promotions = [promo("all-20", DiscountType::Percentage, 20, Applicability::All)];

        let pricing = price_product(&rose(10_000), &promotions, now())?;

        assert_eq!(pricing.original_price, Decimal::from(10_000));
        assert_eq!(pricing.final_price, Decimal::from(8_000));
        assert_eq!(pricing.discount, Decimal::from(2_000));
        assert_eq!(pricing.discount_percentage_label(), "20.0");
        assert!(pricing.has_discount);

        Ok(())
    }

    #[test]
    fn no_live_promotions_leaves_the_price_alone() -> TestResult {
        let promotions =
            [promo("off", DiscountType::Percentage, 20, Applicability::All).with_active(false)];

        let pricing = price_product(&rose(5_000), &promotions, now())?;

        assert!(!pricing.has_discount);
        assert_eq!(pricing.final_price, pricing.original_price);
        assert_eq!(pricing.discount, Decimal::ZERO);
        assert!(pricing.applied_promotions.is_empty());

        Ok(())
    }

    #[test]
    fn zero_price_never_divides_by_zero() -> TestResult {
        let promotions = [
            promo("pct", DiscountType::Percentage, 30, Applicability::All),
            promo("fix", DiscountType::Fixed, 1_000, Applicability::All),
        ];

        let pricing = price_product(&rose(0), &promotions, now())?;

        assert_eq!(pricing.final_price, Decimal::ZERO);
        assert_eq!(pricing.discount_percentage, Decimal::ZERO);
        assert!(pricing.has_discount);

        Ok(())
    }

    #[test]
    fn final_price_is_floored_once_at_the_end() -> TestResult {
        let product = rose(100);
        let fixed_then_half = [
            promo("fix", DiscountType::Fixed, 150, Applicability::All),
            promo("half", DiscountType::Percentage, 50, Applicability::All),
        ];

        let pricing = price_product(&product, &fixed_then_half, now())?;

        assert_eq!(pricing.final_price, Decimal::ZERO);
        assert_eq!(pricing.discount, Decimal::from(100));
        assert_eq!(pricing.discount_percentage_label(), "100.0");

        Ok(())
    }

    #[test]
    fn negative_running_price_is_not_clamped_between_steps() -> TestResult {
        let product = rose(100);
        let fixed_then_double = [
            promo("fix", DiscountType::Fixed, 150, Applicability::All),
            promo("double", DiscountType::Percentage, 200, Applicability::All),
        ];

        let pricing = price_product(&product, &fixed_then_double, now())?;

        // -50 doubled off gives 50; clamping -50 to 0 first would leave 0.
        assert_eq!(pricing.final_price, Decimal::from(50));
        assert_eq!(pricing.discount, Decimal::from(50));
        assert_eq!(pricing.discount_percentage_label(), "50.0");

        Ok(())
    }

    #[test]
    fn stacking_order_changes_the_result() -> TestResult {
        let fixed = promo("fix", DiscountType::Fixed, 50, Applicability::All);
        let half = promo("half", DiscountType::Percentage, 50, Applicability::All);

        let fixed_first = price_product(&rose(100), [&fixed, &half], now())?;
        let half_first = price_product(&rose(100), [&half, &fixed], now())?;

        assert_eq!(fixed_first.final_price, Decimal::from(25));
        assert_eq!(half_first.final_price, Decimal::ZERO);
        assert_eq!(ids(&fixed_first.applied_promotions), ["fix", "half"]);
        assert_eq!(ids(&half_first.applied_promotions), ["half", "fix"]);

        Ok(())
    }

    #[test]
    fn percentage_is_derived_from_the_absolute_discount() -> TestResult {
        let promotions = [
            promo("ten", DiscountType::Percentage, 10, Applicability::All),
            promo("ten-again", DiscountType::Percentage, 10, Applicability::All),
        ];

        let pricing = price_product(&rose(1_000), &promotions, now())?;

        assert_eq!(pricing.final_price, Decimal::from(810));
        assert_eq!(pricing.discount_percentage_label(), "19.0");

        Ok(())
    }

    #[test]
    fn percentage_rounds_to_one_decimal_place() -> TestResult {
        let promotions = [promo("one", DiscountType::Fixed, 1, Applicability::All)];

        let pricing = price_product(&rose(3), &promotions, now())?;

        assert_eq!(pricing.discount_percentage, Decimal::new(333, 1));
        assert_eq!(pricing.discount_percentage_label(), "33.3");

        Ok(())
    }

    #[test]
    fn category_promotion_needs_matching_kind() {
        let roses = promo(
            "rosas",
            DiscountType::Percentage,
            15,
            Applicability::Category {
                kind: ProductKind::Flowers,
                category: "Rosas".to_string(),
            },
        );
        let promotions = [roses];

        let flower = rose(10_000);
        let jewel = Product::new(
            "j",
            ProductKind::Jewelry,
            "Broche",
            "Rosas",
            Decimal::from(10_000),
        );

        assert_eq!(
            ids(&applicable_promotions(&flower, &promotions, now())),
            ["rosas"]
        );
        assert!(applicable_promotions(&jewel, &promotions, now()).is_empty());
    }

    #[test]
    fn applicability_preserves_input_order() {
        let promotions = [
            promo(
                "jewelry",
                DiscountType::Fixed,
                10,
                Applicability::Kind(ProductKind::Jewelry),
            ),
            promo(
                "flowers",
                DiscountType::Fixed,
                10,
                Applicability::Kind(ProductKind::Flowers),
            ),
            promo("all", DiscountType::Fixed, 10, Applicability::All),
            promo("expired", DiscountType::Fixed, 10, Applicability::All)
                .with_schedule(Schedule::until(date(2025, 1, 14))),
            promo("future", DiscountType::Fixed, 10, Applicability::All)
                .with_schedule(Schedule::starting(date(2025, 1, 16))),
            promo("today", DiscountType::Fixed, 10, Applicability::All)
                .with_schedule(Schedule::between(date(2025, 1, 15), date(2025, 1, 15))),
        ];

        let applied = applicable_promotions(&rose(100), &promotions, now());

        assert_eq!(ids(&applied), ["flowers", "all", "today"]);
    }

    #[test]
    fn missing_or_negative_price_returns_the_zero_shape() -> TestResult {
        let promotion = promo("all", DiscountType::Fixed, 10, Applicability::All);

        assert_eq!(
            compute_final_price(None, smallvec![&promotion])?,
            PriceBreakdown::none()
        );
        assert_eq!(
            compute_final_price(Some(&rose(-5)), smallvec![&promotion])?,
            PriceBreakdown::none()
        );

        let none = PriceBreakdown::none();

        assert!(!none.has_discount);
        assert_eq!(none.discount_percentage_label(), "0.0");

        Ok(())
    }

    #[test]
    fn unknown_discount_type_applies_without_changing_the_price() -> TestResult {
        let promotions = [promo(
            "mystery",
            DiscountType::Unknown,
            90,
            Applicability::All,
        )];

        let pricing = price_product(&rose(700), &promotions, now())?;

        assert!(pricing.has_discount);
        assert_eq!(pricing.final_price, Decimal::from(700));
        assert_eq!(pricing.discount_percentage_label(), "0.0");

        Ok(())
    }

    #[test]
    fn repeated_pricing_is_identical() -> TestResult {
        let promotions = [
            promo("a", DiscountType::Percentage, 7, Applicability::All),
            promo(
                "b",
                DiscountType::Fixed,
                13,
                Applicability::Kind(ProductKind::Flowers),
            ),
        ];
        let product = rose(9_990);

        let first = price_product(&product, &promotions, now())?;
        let second = price_product(&product, &promotions, now())?;

        assert_eq!(first, second);
        assert_eq!(first.final_price.to_string(), second.final_price.to_string());

        Ok(())
    }

    #[test]
    fn overflow_surfaces_as_an_error() {
        let promotions = [promo(
            "huge",
            DiscountType::Percentage,
            -1_000,
            Applicability::All,
        )];
        let product = Product::new("x", ProductKind::Flowers, "x", "x", Decimal::MAX);

        assert_eq!(
            price_product(&product, &promotions, now()),
            Err(PricingError::Discount(DiscountError::Overflow))
        );
    }
}
