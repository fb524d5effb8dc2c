//! Petalo Domain Concerns

pub mod admin;
pub mod catalog;
