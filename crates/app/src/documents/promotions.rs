//! Promotion records.

use jiff::{Timestamp, civil::Date};
use petalo::{
    products::ProductKind,
    promotions::{Applicability, DiscountType, Promotion, Schedule},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::documents::RecordError;

/// Stored shape of a `promotions` document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromotionDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_type: Option<DiscountType>,

    #[serde(
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub discount_value: Option<Decimal>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub applicable_to: Option<String>,

    /// Only meaningful for `specific_category`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_type: Option<String>,

    /// Only meaningful for `specific_category`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specific_category: Option<String>,

    /// `YYYY-MM-DD`; an empty string means no start.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,

    /// `YYYY-MM-DD`; an empty string means no end.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
}

impl PromotionDocument {
    /// Convert into a promotion.
    ///
    /// A missing `isActive` reads as inactive and a missing or unrecognised
    /// `discountType` as [`DiscountType::Unknown`].
    ///
    /// # Errors
    ///
    /// - [`RecordError::MissingField`]: no `discountValue` or `applicableTo`.
    /// - [`RecordError::InvalidDate`]: a date is neither empty nor `YYYY-MM-DD`.
    /// - [`RecordError::Applicability`]: the target is unknown or incomplete.
    pub fn into_promotion(self, id: String) -> Result<Promotion, RecordError> {
        let discount_value = self
            .discount_value
            .ok_or(RecordError::MissingField("discountValue"))?;

        let target = self
            .applicable_to
            .ok_or(RecordError::MissingField("applicableTo"))?;

        let product_type = self
            .product_type
            .and_then(|kind| kind.parse::<ProductKind>().ok());

        let applies_to = Applicability::from_parts(
            &target,
            product_type,
            self.specific_category.filter(|name| !name.is_empty()),
        )?;

        let schedule = Schedule {
            start: parse_date("startDate", self.start_date)?,
            end: parse_date("endDate", self.end_date)?,
        };

        let mut promotion = Promotion::new(
            id,
            self.name.unwrap_or_default(),
            self.discount_type.unwrap_or(DiscountType::Unknown),
            discount_value,
            applies_to,
        )
        .with_description(self.description.unwrap_or_default())
        .with_schedule(schedule)
        .with_active(self.is_active.unwrap_or(false));

        promotion.created_at = self.created_at;

        Ok(promotion)
    }
}

fn parse_date(field: &'static str, value: Option<String>) -> Result<Option<Date>, RecordError> {
    match value {
        None => Ok(None),
        Some(value) if value.trim().is_empty() => Ok(None),
        Some(value) => value
            .trim()
            .parse::<Date>()
            .map(Some)
            .map_err(|_err| RecordError::InvalidDate { field, value }),
    }
}

impl From<&Promotion> for PromotionDocument {
    fn from(promotion: &Promotion) -> Self {
        let (product_type, specific_category) = match &promotion.applies_to {
            Applicability::Category { kind, category } => {
                (Some(kind.as_str().to_string()), Some(category.clone()))
            }
            Applicability::All | Applicability::Kind(_) => (None, None),
        };

        Self {
            name: Some(promotion.name.clone()),
            description: Some(promotion.description.clone()),
            discount_type: Some(promotion.discount_type),
            discount_value: Some(promotion.discount_value),
            applicable_to: Some(promotion.applies_to.target().to_string()),
            product_type,
            specific_category,
            start_date: promotion.schedule.start.map(|date| date.to_string()),
            end_date: promotion.schedule.end.map(|date| date.to_string()),
            is_active: Some(promotion.is_active),
            created_at: promotion.created_at,
        }
    }
}
