//! Admin

pub mod errors;
pub mod models;
pub mod service;
pub mod validation;

pub use errors::AdminServiceError;
pub use service::*;
