//! Catalog service errors.

use petalo::{pricing::PricingError, products::ProductKind};
use thiserror::Error;

use crate::{documents::RecordError, store::StoreError};

#[derive(Debug, Error)]
pub enum CatalogServiceError {
    #[error("{kind} product {id} not found")]
    NotFound { kind: ProductKind, id: String },

    #[error("invalid product record")]
    InvalidRecord(#[from] RecordError),

    #[error("pricing failed")]
    Pricing(#[from] PricingError),

    #[error("storage error")]
    Store(#[from] StoreError),
}
