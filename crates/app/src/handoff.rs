//! Checkout hand-off.
//!
//! There is no checkout: a customer asks for a quote through a chat link whose
//! message is pre-filled with the product and its price.

use rust_decimal::{Decimal, RoundingStrategy};
use rusty_money::iso::{self, Currency};
use thiserror::Error;

use crate::domain::catalog::models::Listing;

const CHAT_ENDPOINT: &str = "https://api.whatsapp.com/send";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HandoffError {
    #[error("unknown currency code: {0}")]
    UnknownCurrency(String),
}

/// Builds quote messages and chat links for one shop phone number.
#[derive(Debug, Clone)]
pub struct Handoff {
    phone: String,
    currency: &'static Currency,
}

impl Handoff {
    /// # Errors
    ///
    /// Returns [`HandoffError::UnknownCurrency`] if `currency_code` is not an ISO currency.
    pub fn new(phone: impl Into<String>, currency_code: &str) -> Result<Self, HandoffError> {
        let currency = iso::find(currency_code)
            .ok_or_else(|| HandoffError::UnknownCurrency(currency_code.to_string()))?;

        Ok(Self {
            phone: phone.into(),
            currency,
        })
    }

    /// Format an amount the way the storefront shows prices, e.g. `$12.990`.
    #[must_use]
    pub fn format_price(&self, amount: Decimal) -> String {
        let exponent = self.currency.exponent;
        let rounded = amount.round_dp_with_strategy(exponent, RoundingStrategy::MidpointAwayFromZero);

        let digits = format!("{:.*}", exponent as usize, rounded.abs());
        let number = match digits.split_once('.') {
            Some((whole, fraction)) => format!("{},{fraction}", group_thousands(whole)),
            None => group_thousands(&digits),
        };

        let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
            "-"
        } else {
            ""
        };

        if self.currency.symbol_first {
            format!("{sign}{}{number}", self.currency.symbol)
        } else {
            format!("{sign}{number} {}", self.currency.symbol)
        }
    }

    /// Pre-filled quote request for a listed product.
    #[must_use]
    pub fn message(&self, listing: &Listing) -> String {
        let product = &listing.product;

        let mut message = format!("Hola! Me interesa cotizar: *{}*\n", product.name);

        if !product.category.is_empty() {
            message.push_str(&format!("Categoría: {}\n", product.category));
        }

        message.push_str(&format!(
            "Precio: {}\n",
            self.format_price(listing.original_price)
        ));

        if listing.has_discount {
            message.push_str(&format!(
                "*Con descuento: {}*\n",
                self.format_price(listing.final_price)
            ));
        }

        message.push_str("\n¿Me das más información?");

        message
    }

    /// Chat link carrying the quote request.
    #[must_use]
    pub fn link(&self, listing: &Listing) -> String {
        format!(
            "{CHAT_ENDPOINT}?phone={}&text={}",
            self.phone,
            urlencoding::encode(&self.message(listing))
        )
    }
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);

    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (len - index) % 3 == 0 {
            grouped.push('.');
        }

        grouped.push(digit);
    }

    grouped
}
