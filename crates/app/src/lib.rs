//! Petalo storefront services: document store boundary, catalog and admin
//! services, sessions and roles, and the quote hand-off.

pub mod auth;
pub mod config;
pub mod context;
pub mod documents;
pub mod domain;
pub mod handoff;
pub mod observability;
pub mod store;

#[cfg(test)]
mod test;
