//! Admin form validation.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::domain::admin::models::{NewProduct, NewPromotion, NewUser};

/// Minimum password length accepted for new users.
pub const MIN_PASSWORD_CHARS: usize = 6;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("name is required")]
    BlankName,

    #[error("category is required")]
    BlankCategory,

    #[error("description is required")]
    BlankDescription,

    #[error("price cannot be negative")]
    NegativePrice,

    #[error("discount value is required")]
    ZeroDiscount,

    #[error("start date is after end date")]
    ScheduleOutOfOrder,

    #[error("invalid email address")]
    InvalidEmail,

    #[error("password must be at least {MIN_PASSWORD_CHARS} characters")]
    PasswordTooShort,

    #[error("passwords do not match")]
    PasswordMismatch,
}

/// # Errors
///
/// Fails when the name or category is blank or the price is negative.
pub fn validate_product(product: &NewProduct) -> Result<(), ValidationError> {
    if product.name.trim().is_empty() {
        return Err(ValidationError::BlankName);
    }

    if product.category.trim().is_empty() {
        return Err(ValidationError::BlankCategory);
    }

    if product.price.is_sign_negative() {
        return Err(ValidationError::NegativePrice);
    }

    Ok(())
}

/// Trimmed category name.
///
/// # Errors
///
/// Fails when nothing is left after trimming.
pub fn validate_category_name(name: &str) -> Result<String, ValidationError> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::BlankName);
    }

    Ok(name.to_string())
}

/// Percentage values are not capped at 100.
///
/// # Errors
///
/// Fails on a blank name or description, a zero discount, or a start after the end.
pub fn validate_promotion(promotion: &NewPromotion) -> Result<(), ValidationError> {
    if promotion.name.trim().is_empty() {
        return Err(ValidationError::BlankName);
    }

    if promotion.description.trim().is_empty() {
        return Err(ValidationError::BlankDescription);
    }

    if promotion.discount_value == Decimal::ZERO {
        return Err(ValidationError::ZeroDiscount);
    }

    if !promotion.schedule.is_ordered() {
        return Err(ValidationError::ScheduleOutOfOrder);
    }

    Ok(())
}

/// # Errors
///
/// Fails on a malformed email, a short password, or a mismatched confirmation.
pub fn validate_user(user: &NewUser) -> Result<(), ValidationError> {
    if !is_email(&user.email) {
        return Err(ValidationError::InvalidEmail);
    }

    if user.password.chars().count() < MIN_PASSWORD_CHARS {
        return Err(ValidationError::PasswordTooShort);
    }

    if user.password != user.confirm_password {
        return Err(ValidationError::PasswordMismatch);
    }

    Ok(())
}

/// `local@domain.tld` with no whitespace and a single `@`.
fn is_email(email: &str) -> bool {
    let plain = |part: &str| {
        !part.is_empty() && !part.chars().any(|c| c.is_whitespace() || c == '@')
    };

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    plain(local)
        && plain(domain)
        && domain
            .char_indices()
            .skip(1)
            .any(|(index, c)| c == '.' && index + 1 < domain.len())
}
