//! Auth errors.

use thiserror::Error;

use crate::{
    auth::{Permission, Role},
    store::StoreError,
};

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("email already registered")]
    EmailInUse,

    #[error("unknown role: {0}")]
    UnknownRole(String),

    #[error("missing permission: {0}")]
    Forbidden(Permission),

    #[error("requires the {0} role")]
    RoleRequired(Role),

    #[error("storage error")]
    Store(#[from] StoreError),
}
