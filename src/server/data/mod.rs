//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for each
//! domain in the application. Repositories use SeaORM entity models internally and
//! return either domain models or entity models for the service layer to convert.
//! All database queries, inserts, updates, and deletes are performed through these
//! repositories.

pub mod booking;
pub mod comment;
pub mod item;
pub mod item_request;
pub mod user;

#[cfg(test)]
mod test;
