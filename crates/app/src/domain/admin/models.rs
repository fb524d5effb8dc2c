//! Admin Models

use petalo::{
    products::ProductKind,
    promotions::{Applicability, DiscountType, Schedule},
};
use rust_decimal::Decimal;

use crate::auth::Role;

/// Product form contents, used for both adding and updating.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub kind: ProductKind,
    pub name: String,
    pub category: String,
    pub price: Decimal,
    pub image_url: Option<String>,
    pub description: Option<String>,
}

/// Promotion form contents.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPromotion {
    pub name: String,
    pub description: String,
    pub discount_type: DiscountType,
    pub discount_value: Decimal,
    pub applies_to: Applicability,
    pub schedule: Schedule,
    pub is_active: bool,
}

/// User registration form contents.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub role: Role,
}
