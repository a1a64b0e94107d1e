//! Shared helpers used across services and repositories.

pub mod page;
pub mod validate;
