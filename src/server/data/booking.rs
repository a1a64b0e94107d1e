//! Booking data repository.
//!
//! Returns raw entity models; the booking service converts them into domain models
//! because the stored status string has to be parsed and may be invalid. List reads
//! join the booked item so the read-model can be assembled without a second query.

use crate::server::{
    model::booking::{BookingState, BookingStatus},
    util::page::OffsetPage,
};
use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection,
    DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

/// Stored statuses that still occupy the item's calendar.
const BLOCKING_STATUSES: [&str; 2] = [
    BookingStatus::BLOCKING[0].as_str(),
    BookingStatus::BLOCKING[1].as_str(),
];

pub struct BookingRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookingRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a booking.
    ///
    /// # Arguments
    /// - `item_id`: Item being booked
    /// - `booker_id`: User making the booking
    /// - `start`: Start of the booked range
    /// - `end`: End of the booked range
    /// - `status`: Initial status
    ///
    /// # Returns
    /// - `Ok(entity::booking::Model)`: The created booking row
    /// - `Err(DbErr)`: Database error
    pub async fn create(
        &self,
        item_id: i32,
        booker_id: i32,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        status: BookingStatus,
    ) -> Result<entity::booking::Model, DbErr> {
        entity::booking::ActiveModel {
            start: ActiveValue::Set(start),
            end: ActiveValue::Set(end),
            item_id: ActiveValue::Set(item_id),
            booker_id: ActiveValue::Set(booker_id),
            status: ActiveValue::Set(status.as_str().to_string()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets a booking together with its item.
    ///
    /// # Returns
    /// - `Ok(Some((booking, Some(item))))`: Booking and item found
    /// - `Ok(Some((booking, None)))`: Booking found but its item row is missing
    /// - `Ok(None)`: Booking not found
    /// - `Err(DbErr)`: Database error
    pub async fn find_by_id_with_item(
        &self,
        id: i32,
    ) -> Result<Option<(entity::booking::Model, Option<entity::item::Model>)>, DbErr> {
        entity::prelude::Booking::find_by_id(id)
            .find_also_related(entity::prelude::Item)
            .one(self.db)
            .await
    }

    /// Gets a page of bookings made by `booker_id`, newest start first.
    pub async fn find_by_booker(
        &self,
        booker_id: i32,
        state: BookingState,
        now: DateTime<Utc>,
        page: OffsetPage,
    ) -> Result<Vec<(entity::booking::Model, Option<entity::item::Model>)>, DbErr> {
        let query = entity::prelude::Booking::find()
            .find_also_related(entity::prelude::Item)
            .filter(entity::booking::Column::BookerId.eq(booker_id))
            .filter(state_condition(state, now))
            .order_by_desc(entity::booking::Column::Start)
            .order_by_desc(entity::booking::Column::Id);

        page.apply(query).all(self.db).await
    }

    /// Gets a page of bookings on items owned by `owner_id`, newest start first.
    pub async fn find_by_owner(
        &self,
        owner_id: i32,
        state: BookingState,
        now: DateTime<Utc>,
        page: OffsetPage,
    ) -> Result<Vec<(entity::booking::Model, Option<entity::item::Model>)>, DbErr> {
        let query = entity::prelude::Booking::find()
            .find_also_related(entity::prelude::Item)
            .filter(entity::item::Column::OwnerId.eq(owner_id))
            .filter(state_condition(state, now))
            .order_by_desc(entity::booking::Column::Start)
            .order_by_desc(entity::booking::Column::Id);

        page.apply(query).all(self.db).await
    }

    /// Gets the booking of `item_id` that ended most recently before `as_of`.
    ///
    /// Rejected and canceled bookings are ignored.
    pub async fn last_before(
        &self,
        item_id: i32,
        as_of: DateTime<Utc>,
    ) -> Result<Option<entity::booking::Model>, DbErr> {
        entity::prelude::Booking::find()
            .filter(entity::booking::Column::ItemId.eq(item_id))
            .filter(entity::booking::Column::End.lt(as_of))
            .filter(entity::booking::Column::Status.is_in(BLOCKING_STATUSES))
            .order_by_desc(entity::booking::Column::End)
            .order_by_desc(entity::booking::Column::Id)
            .one(self.db)
            .await
    }

    /// Gets the earliest booking of `item_id` starting after `as_of`.
    ///
    /// Rejected and canceled bookings are ignored.
    pub async fn next_after(
        &self,
        item_id: i32,
        as_of: DateTime<Utc>,
    ) -> Result<Option<entity::booking::Model>, DbErr> {
        entity::prelude::Booking::find()
            .filter(entity::booking::Column::ItemId.eq(item_id))
            .filter(entity::booking::Column::Start.gt(as_of))
            .filter(entity::booking::Column::Status.is_in(BLOCKING_STATUSES))
            .order_by_asc(entity::booking::Column::Start)
            .order_by_asc(entity::booking::Column::Id)
            .one(self.db)
            .await
    }

    /// Counts approved bookings of `item_id` made by `booker_id`.
    ///
    /// # Arguments
    /// - `item_id`: Item ID
    /// - `booker_id`: Booker ID
    /// - `ended_before`: When present, only bookings whose end precedes it are counted
    pub async fn count_approved(
        &self,
        item_id: i32,
        booker_id: i32,
        ended_before: Option<DateTime<Utc>>,
    ) -> Result<u64, DbErr> {
        let mut query = entity::prelude::Booking::find()
            .filter(entity::booking::Column::ItemId.eq(item_id))
            .filter(entity::booking::Column::BookerId.eq(booker_id))
            .filter(entity::booking::Column::Status.eq(BookingStatus::Approved.as_str()));

        if let Some(ended_before) = ended_before {
            query = query.filter(entity::booking::Column::End.lt(ended_before));
        }

        query.count(self.db).await
    }

    /// Whether any WAITING or APPROVED booking of `item_id` intersects `[start, end)`.
    pub async fn has_overlap(
        &self,
        item_id: i32,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<bool, DbErr> {
        let count = entity::prelude::Booking::find()
            .filter(entity::booking::Column::ItemId.eq(item_id))
            .filter(entity::booking::Column::Status.is_in(BLOCKING_STATUSES))
            .filter(entity::booking::Column::Start.lt(end))
            .filter(entity::booking::Column::End.gt(start))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Moves a WAITING booking to `status`.
    ///
    /// The status check and the write happen in a single `UPDATE ... WHERE status =
    /// 'WAITING'`, so of two concurrent decisions on the same booking only one can
    /// match the row.
    ///
    /// # Returns
    /// - `Ok(true)`: The booking was waiting and now holds `status`
    /// - `Ok(false)`: No waiting booking with that id
    /// - `Err(DbErr)`: Database error
    pub async fn decide(&self, id: i32, status: BookingStatus) -> Result<bool, DbErr> {
        let result = entity::prelude::Booking::update_many()
            .col_expr(
                entity::booking::Column::Status,
                Expr::value(status.as_str().to_string()),
            )
            .filter(entity::booking::Column::Id.eq(id))
            .filter(entity::booking::Column::Status.eq(BookingStatus::Waiting.as_str()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}

/// Builds the WHERE fragment for a booking list filter, evaluated against `now`.
fn state_condition(state: BookingState, now: DateTime<Utc>) -> Condition {
    match state {
        BookingState::All => Condition::all(),
        BookingState::Current => Condition::all()
            .add(entity::booking::Column::Start.lte(now))
            .add(entity::booking::Column::End.gte(now)),
        BookingState::Past => Condition::all().add(entity::booking::Column::End.lt(now)),
        BookingState::Future => Condition::all().add(entity::booking::Column::Start.gt(now)),
        BookingState::Waiting => Condition::all()
            .add(entity::booking::Column::Status.eq(BookingStatus::Waiting.as_str())),
        BookingState::Rejected => Condition::all()
            .add(entity::booking::Column::Status.eq(BookingStatus::Rejected.as_str())),
    }
}
