//! Promotions prelude.

pub use super::{
    Applicability, ApplicabilityError, DiscountType, Promotion, Schedule, evaluation_date,
};
