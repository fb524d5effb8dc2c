//! Admin service errors.

use thiserror::Error;

use crate::{
    auth::{AuthError, Permission},
    documents::RecordError,
    domain::admin::validation::ValidationError,
    store::{Collection, StoreError},
};

#[derive(Debug, Error)]
pub enum AdminServiceError {
    #[error("missing permission: {0}")]
    Forbidden(Permission),

    #[error("invalid input: {0}")]
    Invalid(#[from] ValidationError),

    #[error("{collection}/{id} not found")]
    NotFound { collection: Collection, id: String },

    #[error("email already registered")]
    EmailTaken,

    #[error("identity provider error")]
    Identity(#[source] AuthError),

    #[error("invalid stored record")]
    Record(#[from] RecordError),

    #[error("storage error")]
    Store(#[source] StoreError),
}

impl From<StoreError> for AdminServiceError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::NotFound { collection, id } => Self::NotFound { collection, id },
            other => Self::Store(other),
        }
    }
}

impl From<AuthError> for AdminServiceError {
    fn from(error: AuthError) -> Self {
        match error {
            AuthError::Forbidden(permission) => Self::Forbidden(permission),
            AuthError::EmailInUse => Self::EmailTaken,
            AuthError::Store(error) => Self::from(error),
            other => Self::Identity(other),
        }
    }
}
