//! Promotions

use std::fmt;

use jiff::{Timestamp, civil::Date};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::products::Product;

pub mod applicability;
pub mod prelude;
pub mod schedule;

pub use applicability::{Applicability, ApplicabilityError};
pub use schedule::{Schedule, evaluation_date};

/// How a promotion reduces a price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscountType {
    /// Take `value` percent off the running price
    Percentage,

    /// Subtract `value` from the running price
    Fixed,

    /// Any stored value this engine does not recognise; leaves prices unchanged.
    #[serde(other)]
    Unknown,
}

impl DiscountType {
    /// Stored name of the discount type.
    pub const fn as_str(self) -> &'static str {
        match self {
            DiscountType::Percentage => "percentage",
            DiscountType::Fixed => "fixed",
            DiscountType::Unknown => "unknown",
        }
    }
}

impl fmt::Display for DiscountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Promotion
#[derive(Debug, Clone, PartialEq)]
pub struct Promotion {
    /// Store-assigned identifier
    pub id: String,

    /// Display name
    pub name: String,

    /// Display description
    pub description: String,

    /// Discount type
    pub discount_type: DiscountType,

    /// Percentage points or fixed amount, depending on `discount_type`.
    ///
    /// Percentages are not range-checked.
    pub discount_value: Decimal,

    /// Products the promotion covers
    pub applies_to: Applicability,

    /// Calendar window
    pub schedule: Schedule,

    /// Manual on/off switch, independent of the schedule
    pub is_active: bool,

    /// Creation time, when recorded
    pub created_at: Option<Timestamp>,
}

impl Promotion {
    /// Create an active, unscheduled promotion.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        discount_type: DiscountType,
        discount_value: Decimal,
        applies_to: Applicability,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            discount_type,
            discount_value,
            applies_to,
            schedule: Schedule::unbounded(),
            is_active: true,
            created_at: None,
        }
    }

    /// Replace the schedule.
    #[must_use]
    pub fn with_schedule(mut self, schedule: Schedule) -> Self {
        self.schedule = schedule;
        self
    }

    /// Replace the active flag.
    #[must_use]
    pub fn with_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Replace the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Whether the promotion is switched on and runs on `day`.
    pub fn is_live_on(&self, day: Date) -> bool {
        self.is_active && self.schedule.contains(day)
    }

    /// Whether the promotion is live at `now`.
    pub fn is_live_at(&self, now: Timestamp) -> bool {
        self.is_live_on(evaluation_date(now))
    }

    /// Whether the promotion covers `product`, ignoring liveness.
    pub fn covers(&self, product: &Product) -> bool {
        self.applies_to.covers(product)
    }
}
