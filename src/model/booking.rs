use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingDto {
    pub item_id: i32,
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingDto {
    pub id: i32,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    /// One of `WAITING`, `APPROVED`, `REJECTED`, `CANCELED`.
    pub status: String,
    pub booker: BookerDto,
    pub item: BookedItemDto,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct BookerDto {
    pub id: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct BookedItemDto {
    pub id: i32,
    pub name: String,
}

/// Compact booking attached to an item read by its owner.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingShortDto {
    pub id: i32,
    pub booker_id: i32,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}
