//! API data transfer objects.
//!
//! Request and response bodies exchanged over HTTP. DTOs are plain serde types with
//! OpenAPI schemas; conversion to and from server-side domain models happens in
//! `server::model`.

pub mod api;
pub mod booking;
pub mod item;
pub mod item_request;
pub mod user;
