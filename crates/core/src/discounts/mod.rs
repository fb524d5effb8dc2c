//! Discounts
//!
//! Single-step discount arithmetic and sequential stacking.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::promotions::{DiscountType, Promotion};

/// Errors specific to discount calculations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DiscountError {
    /// A step left the representable decimal range.
    #[error("discount arithmetic overflowed the decimal range")]
    Overflow,
}

/// Apply one discount to a running price.
///
/// No clamping happens here: a fixed discount larger than the price yields a
/// negative result, which later steps keep operating on.
///
/// # Errors
///
/// Returns [`DiscountError::Overflow`] if the result cannot be represented.
pub fn apply_discount(
    price: Decimal,
    discount_type: DiscountType,
    value: Decimal,
) -> Result<Decimal, DiscountError> {
    match discount_type {
        DiscountType::Percentage => {
            let factor = value
                .checked_div(Decimal::ONE_HUNDRED)
                .and_then(|fraction| Decimal::ONE.checked_sub(fraction))
                .ok_or(DiscountError::Overflow)?;

            price.checked_mul(factor).ok_or(DiscountError::Overflow)
        }
        DiscountType::Fixed => price.checked_sub(value).ok_or(DiscountError::Overflow),
        DiscountType::Unknown => Ok(price),
    }
}

/// Apply every promotion to `price` in the order given.
///
/// The order is significant and is never normalised.
///
/// # Errors
///
/// Returns [`DiscountError::Overflow`] if any step cannot be represented.
pub fn stack_discounts<'p>(
    price: Decimal,
    promotions: impl IntoIterator<Item = &'p Promotion>,
) -> Result<Decimal, DiscountError> {
    promotions.into_iter().try_fold(price, |running, promotion| {
        apply_discount(running, promotion.discount_type, promotion.discount_value)
    })
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::promotions::Applicability;

    use super::*;

    fn promotion(discount_type: DiscountType, value: i64) -> Promotion {
        Promotion::new(
            format!("{discount_type}-{value}"),
            "test",
            discount_type,
            Decimal::from(value),
            Applicability::All,
        )
    }

    #[test]
    fn percentage_takes_a_share_off() -> TestResult {
        let price = apply_discount(
            Decimal::from(10_000),
            DiscountType::Percentage,
            Decimal::from(20),
        )?;

        assert_eq!(price, Decimal::from(8_000));

        Ok(())
    }

    #[test]
    fn fixed_subtracts_and_may_go_negative() -> TestResult {
        let price = apply_discount(Decimal::from(100), DiscountType::Fixed, Decimal::from(150))?;

        assert_eq!(price, Decimal::from(-50));

        Ok(())
    }

    #[test]
    fn unknown_type_is_a_no_op() -> TestResult {
        let price = apply_discount(Decimal::from(100), DiscountType::Unknown, Decimal::from(99))?;

        assert_eq!(price, Decimal::from(100));

        Ok(())
    }

    #[test]
    fn percentage_above_one_hundred_is_not_guarded() -> TestResult {
        let price = apply_discount(
            Decimal::from(100),
            DiscountType::Percentage,
            Decimal::from(150),
        )?;

        assert_eq!(price, Decimal::from(-50));

        Ok(())
    }

    #[test]
    fn stacking_follows_the_given_order() -> TestResult {
        let fixed = promotion(DiscountType::Fixed, 50);
        let half = promotion(DiscountType::Percentage, 50);

        assert_eq!(
            stack_discounts(Decimal::from(100), [&fixed, &half])?,
            Decimal::from(25)
        );
        assert_eq!(
            stack_discounts(Decimal::from(100), [&half, &fixed])?,
            Decimal::ZERO
        );

        Ok(())
    }

    #[test]
    fn negative_intermediate_flows_through_later_steps() -> TestResult {
        let fixed = promotion(DiscountType::Fixed, 150);
        let half = promotion(DiscountType::Percentage, 50);

        assert_eq!(
            stack_discounts(Decimal::from(100), [&fixed, &half])?,
            Decimal::from(-25)
        );

        Ok(())
    }

    #[test]
    fn stacking_nothing_keeps_the_price() -> TestResult {
        assert_eq!(stack_discounts(Decimal::from(42), [])?, Decimal::from(42));

        Ok(())
    }

    #[test]
    fn overflow_is_reported() {
        let result = apply_discount(Decimal::MAX, DiscountType::Percentage, Decimal::from(-100));

        assert_eq!(result, Err(DiscountError::Overflow));

        let result = apply_discount(Decimal::MIN, DiscountType::Fixed, Decimal::ONE);

        assert_eq!(result, Err(DiscountError::Overflow));
    }
}
