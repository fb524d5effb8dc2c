//! Petalo
//!
//! Promotion applicability and discount stacking for the Petalo flower and jewelry storefront.

pub mod catalog;
pub mod discounts;
pub mod fixtures;
pub mod prelude;
pub mod pricing;
pub mod products;
pub mod promotions;
