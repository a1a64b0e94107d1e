//! Booking service for business logic.
//!
//! Owns the booking lifecycle: creation gated on dates, ownership, availability and
//! calendar conflicts; the one-shot owner decision; participant-only reads; and the
//! derived facts the catalog needs (last/next booking of an item and the approved
//! booking count that gates comments).

use chrono::{DateTime, Utc};
use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{booking::BookingRepository, item::ItemRepository},
    error::{field::ValidationErrors, internal::InternalError, AppError},
    model::{
        booking::{
            Booking, BookingState, BookingStatus, BookingWindow, BookingWithItem,
            CreateBookingParams,
        },
        item::Item,
    },
    service::{item::item_not_found, user::UserService},
    util::{page::OffsetPage, validate},
};

/// Service providing business logic for bookings.
pub struct BookingService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> BookingService<'a> {
    /// Creates a new BookingService instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Books an item for the requesting user.
    ///
    /// Checks run in order and the first failing group is returned: date range,
    /// booker exists, item exists, booker is not the owner, item is available, and
    /// the range does not intersect a waiting or approved booking of the same item.
    ///
    /// # Arguments
    /// - `booker_id` - User making the booking
    /// - `params` - Item and requested range
    ///
    /// # Returns
    /// - `Ok(BookingWithItem)` - The new booking, status `WAITING`
    /// - `Err(AppError::Validation)` - Bad range, unavailable item or calendar conflict
    /// - `Err(AppError::NotFound)` - Booker or item does not exist
    /// - `Err(AppError::AccessDenied)` - Booker owns the item
    pub async fn create(
        &self,
        booker_id: i32,
        params: CreateBookingParams,
    ) -> Result<BookingWithItem, AppError> {
        let now = Utc::now();

        let mut errors = ValidationErrors::new();
        let Some((start, end)) = validate::booking_range(&mut errors, params.start, params.end, now)
        else {
            return Err(errors.into());
        };

        UserService::new(self.db).require(booker_id).await?;

        let item = ItemRepository::new(self.db)
            .find_by_id(params.item_id)
            .await?
            .ok_or_else(|| item_not_found(params.item_id))?;

        if item.owner_id == booker_id {
            tracing::debug!(
                "User {} attempted to book own item {}",
                booker_id,
                item.id
            );
            return Err(AppError::access_denied(
                "itemId",
                "Owner cannot book their own item",
            ));
        }

        if !item.available {
            return Err(AppError::validation(
                "itemId",
                format!("Item {} is not available for booking", item.id),
            ));
        }

        let booking_repo = BookingRepository::new(self.db);
        if booking_repo.has_overlap(item.id, start, end).await? {
            return Err(AppError::validation(
                "start",
                format!("Item {} is already booked for the requested period", item.id),
            ));
        }

        let entity = booking_repo
            .create(item.id, booker_id, start, end, BookingStatus::Waiting)
            .await?;
        let booking = Booking::from_entity(entity)?;

        tracing::info!(
            "User {} booked item {} as booking {}",
            booker_id,
            item.id,
            booking.id
        );

        Ok(BookingWithItem { booking, item })
    }

    /// Records the owner's decision on a waiting booking.
    ///
    /// The status change is a conditional update on `status = 'WAITING'`; when two
    /// decisions race, the one that loses finds no waiting row and fails.
    ///
    /// # Arguments
    /// - `owner_id` - User claiming to own the booked item
    /// - `booking_id` - Booking to decide
    /// - `approved` - `true` to approve, `false` to reject
    ///
    /// # Returns
    /// - `Ok(BookingWithItem)` - Booking with its new status
    /// - `Err(AppError::NotFound)` - Booking does not exist
    /// - `Err(AppError::AccessDenied)` - Caller does not own the item
    /// - `Err(AppError::Validation)` - Booking was already decided
    pub async fn approve(
        &self,
        owner_id: i32,
        booking_id: i32,
        approved: bool,
    ) -> Result<BookingWithItem, AppError> {
        let BookingWithItem { mut booking, item } = self.find_with_item(booking_id).await?;

        if item.owner_id != owner_id {
            return Err(AppError::access_denied(
                "bookingId",
                format!("Only the owner of item {} can decide its bookings", item.id),
            ));
        }

        let status = BookingStatus::decided(approved);
        if !BookingRepository::new(self.db)
            .decide(booking.id, status)
            .await?
        {
            tracing::debug!(
                "Booking {} already decided, rejecting {} by user {}",
                booking.id,
                status,
                owner_id
            );
            return Err(already_decided(booking.id));
        }

        booking.status = status;

        tracing::info!("Booking {} {} by user {}", booking.id, status, owner_id);

        Ok(BookingWithItem { booking, item })
    }

    /// Gets a booking visible to `user_id`.
    ///
    /// # Returns
    /// - `Ok(BookingWithItem)` - Caller is the booker or the item owner
    /// - `Err(AppError::NotFound)` - Caller or booking does not exist
    /// - `Err(AppError::AccessDenied)` - Caller is neither booker nor owner
    pub async fn get(&self, user_id: i32, booking_id: i32) -> Result<BookingWithItem, AppError> {
        UserService::new(self.db).require(user_id).await?;

        let found = self.find_with_item(booking_id).await?;
        if found.booking.booker_id != user_id && found.item.owner_id != user_id {
            return Err(AppError::access_denied(
                "bookingId",
                format!("Booking {} is visible only to its booker and item owner", booking_id),
            ));
        }

        Ok(found)
    }

    /// Gets a page of the user's own bookings, newest start first.
    ///
    /// # Returns
    /// - `Ok(Vec<BookingWithItem>)` - Bookings matching `state`
    /// - `Err(AppError::NotFound)` - User does not exist
    pub async fn get_by_booker(
        &self,
        booker_id: i32,
        state: BookingState,
        page: OffsetPage,
    ) -> Result<Vec<BookingWithItem>, AppError> {
        UserService::new(self.db).require(booker_id).await?;

        let rows = BookingRepository::new(self.db)
            .find_by_booker(booker_id, state, Utc::now(), page)
            .await?;

        rows.into_iter().map(with_item).collect()
    }

    /// Gets a page of bookings on the user's items, newest start first.
    ///
    /// # Returns
    /// - `Ok(Vec<BookingWithItem>)` - Bookings matching `state`
    /// - `Err(AppError::NotFound)` - User does not exist
    pub async fn get_by_owner(
        &self,
        owner_id: i32,
        state: BookingState,
        page: OffsetPage,
    ) -> Result<Vec<BookingWithItem>, AppError> {
        UserService::new(self.db).require(owner_id).await?;

        let rows = BookingRepository::new(self.db)
            .find_by_owner(owner_id, state, Utc::now(), page)
            .await?;

        rows.into_iter().map(with_item).collect()
    }

    /// Most recent booking of an item that ended before `as_of`.
    pub async fn last_booking_of(
        &self,
        item_id: i32,
        as_of: DateTime<Utc>,
    ) -> Result<Option<Booking>, AppError> {
        BookingRepository::new(self.db)
            .last_before(item_id, as_of)
            .await?
            .map(Booking::from_entity)
            .transpose()
    }

    /// Earliest booking of an item that starts after `as_of`.
    pub async fn next_booking_of(
        &self,
        item_id: i32,
        as_of: DateTime<Utc>,
    ) -> Result<Option<Booking>, AppError> {
        BookingRepository::new(self.db)
            .next_after(item_id, as_of)
            .await?
            .map(Booking::from_entity)
            .transpose()
    }

    /// Last and next booking of an item relative to `as_of`.
    pub async fn window_of(
        &self,
        item_id: i32,
        as_of: DateTime<Utc>,
    ) -> Result<BookingWindow, AppError> {
        Ok(BookingWindow {
            last: self.last_booking_of(item_id, as_of).await?,
            next: self.next_booking_of(item_id, as_of).await?,
        })
    }

    /// Counts approved bookings of `item_id` by `booker_id`.
    ///
    /// # Arguments
    /// - `ended_before` - When present, only bookings that ended before it count
    pub async fn approved_booking_count(
        &self,
        item_id: i32,
        booker_id: i32,
        ended_before: Option<DateTime<Utc>>,
    ) -> Result<u64, AppError> {
        Ok(BookingRepository::new(self.db)
            .count_approved(item_id, booker_id, ended_before)
            .await?)
    }

    async fn find_with_item(&self, booking_id: i32) -> Result<BookingWithItem, AppError> {
        let row = BookingRepository::new(self.db)
            .find_by_id_with_item(booking_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found("bookingId", format!("Booking with id {} not found", booking_id))
            })?;

        with_item(row)
    }
}

/// Converts a joined booking row, treating a missing item as corrupted state.
fn with_item(
    (booking, item): (entity::booking::Model, Option<entity::item::Model>),
) -> Result<BookingWithItem, AppError> {
    let item = item.ok_or_else(|| InternalError::MissingRelation {
        entity: "item",
        id: booking.item_id,
        referenced_by: format!("booking {}", booking.id),
    })?;

    Ok(BookingWithItem {
        booking: Booking::from_entity(booking)?,
        item: Item::from_entity(item),
    })
}

fn already_decided(booking_id: i32) -> AppError {
    AppError::validation(
        "status",
        format!("Booking {} has already been decided", booking_id),
    )
}
