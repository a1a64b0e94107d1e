//! Business logic layer.
//!
//! Services enforce the marketplace rules on top of the repositories: who may book
//! or decide a booking, when a comment may be posted, and which extras an item read
//! carries for a given viewer. Each service borrows the database connection for the
//! duration of a request and works exclusively with domain models.

pub mod booking;
pub mod item;
pub mod item_request;
pub mod user;
