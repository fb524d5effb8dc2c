//! Authentication and access control

mod errors;
mod identity;
mod models;
mod roles;
mod service;

pub use errors::*;
pub use identity::*;
pub use models::*;
pub use roles::*;
pub use service::*;
