//! Booking domain models, lifecycle states and list filters.

use chrono::{DateTime, Utc};
use std::{fmt, str::FromStr};

use crate::{
    model::booking::{BookedItemDto, BookerDto, BookingDto, BookingShortDto, CreateBookingDto},
    server::{
        error::{internal::InternalError, AppError},
        model::item::Item,
    },
};

/// Lifecycle state of a booking.
///
/// ```text
/// WAITING --approve(true)--> APPROVED
/// WAITING --approve(false)-> REJECTED
/// ```
///
/// `APPROVED` and `REJECTED` are terminal. `CANCELED` is a valid stored value but
/// no operation currently produces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingStatus {
    Waiting,
    Approved,
    Rejected,
    Canceled,
}

impl BookingStatus {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Waiting => "WAITING",
            Self::Approved => "APPROVED",
            Self::Rejected => "REJECTED",
            Self::Canceled => "CANCELED",
        }
    }

    /// Outcome of the owner's decision on a waiting booking.
    pub fn decided(approved: bool) -> Self {
        if approved {
            Self::Approved
        } else {
            Self::Rejected
        }
    }

    /// Statuses of bookings that still occupy their time range.
    pub const BLOCKING: [Self; 2] = [Self::Waiting, Self::Approved];
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookingStatus {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "WAITING" => Ok(Self::Waiting),
            "APPROVED" => Ok(Self::Approved),
            "REJECTED" => Ok(Self::Rejected),
            "CANCELED" => Ok(Self::Canceled),
            other => Err(other.to_string()),
        }
    }
}

/// List filter for booking reads, relative to the time of the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BookingState {
    #[default]
    All,
    /// Started and not yet ended.
    Current,
    /// Already ended.
    Past,
    /// Not yet started.
    Future,
    Waiting,
    Rejected,
}

impl BookingState {
    /// Parses the optional `state` query parameter.
    ///
    /// Matching is case-insensitive and an absent parameter means `ALL`.
    ///
    /// # Returns
    /// - `Ok(BookingState)` - Known filter
    /// - `Err(AppError::Validation)` - `Unknown state: <value>` on `state`
    pub fn parse(value: Option<&str>) -> Result<Self, AppError> {
        let Some(value) = value else {
            return Ok(Self::All);
        };

        match value.to_ascii_uppercase().as_str() {
            "ALL" => Ok(Self::All),
            "CURRENT" => Ok(Self::Current),
            "PAST" => Ok(Self::Past),
            "FUTURE" => Ok(Self::Future),
            "WAITING" => Ok(Self::Waiting),
            "REJECTED" => Ok(Self::Rejected),
            _ => Err(AppError::validation(
                "state",
                format!("Unknown state: {}", value),
            )),
        }
    }
}

/// A request by a booker to use an item for `[start, end)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    pub id: i32,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub item_id: i32,
    pub booker_id: i32,
    pub status: BookingStatus,
}

impl Booking {
    /// Converts an entity model to a booking domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Booking)` - The converted booking
    /// - `Err(AppError::InternalErr(UnknownBookingStatus))` - Stored status is not a
    ///   known lifecycle state
    pub fn from_entity(entity: entity::booking::Model) -> Result<Self, AppError> {
        let status = entity
            .status
            .parse::<BookingStatus>()
            .map_err(|value| InternalError::UnknownBookingStatus {
                booking_id: entity.id,
                value,
            })?;

        Ok(Self {
            id: entity.id,
            start: entity.start,
            end: entity.end,
            item_id: entity.item_id,
            booker_id: entity.booker_id,
            status,
        })
    }

    pub fn into_short_dto(self) -> BookingShortDto {
        BookingShortDto {
            id: self.id,
            booker_id: self.booker_id,
            start: self.start,
            end: self.end,
        }
    }
}

/// Booking together with the item it reserves.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingWithItem {
    pub booking: Booking,
    pub item: Item,
}

impl BookingWithItem {
    pub fn into_dto(self) -> BookingDto {
        BookingDto {
            id: self.booking.id,
            start: self.booking.start,
            end: self.booking.end,
            status: self.booking.status.as_str().to_string(),
            booker: BookerDto {
                id: self.booking.booker_id,
            },
            item: BookedItemDto {
                id: self.item.id,
                name: self.item.name,
            },
        }
    }
}

/// Most recent finished and earliest upcoming booking of an item.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BookingWindow {
    pub last: Option<Booking>,
    pub next: Option<Booking>,
}

/// Parameters for creating a booking.
///
/// `start` and `end` stay optional so the service can report a missing end and a
/// past start in one response.
#[derive(Debug, Clone)]
pub struct CreateBookingParams {
    pub item_id: i32,
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
}

impl CreateBookingParams {
    pub fn from_dto(dto: CreateBookingDto) -> Self {
        Self {
            item_id: dto.item_id,
            start: dto.start,
            end: dto.end,
        }
    }
}
