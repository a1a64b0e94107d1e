//! Booking factory for creating test booking entities.

use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test bookings with customizable fields.
///
/// The factory writes the row as-is; it does not check availability, ownership or
/// overlap, which lets tests set up past or already-decided bookings directly.
pub struct BookingFactory<'a> {
    db: &'a DatabaseConnection,
    item_id: i32,
    booker_id: i32,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    status: String,
}

impl<'a> BookingFactory<'a> {
    /// Creates a new BookingFactory with default values.
    ///
    /// Defaults:
    /// - start: 1 day from now
    /// - end: 2 days from now
    /// - status: `"WAITING"`
    pub fn new(db: &'a DatabaseConnection, item_id: i32, booker_id: i32) -> Self {
        let now = Utc::now();
        Self {
            db,
            item_id,
            booker_id,
            start: now + Duration::days(1),
            end: now + Duration::days(2),
            status: "WAITING".to_string(),
        }
    }

    /// Sets the booking start.
    pub fn start(mut self, start: DateTime<Utc>) -> Self {
        self.start = start;
        self
    }

    /// Sets the booking end.
    pub fn end(mut self, end: DateTime<Utc>) -> Self {
        self.end = end;
        self
    }

    /// Sets the stored status string.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Builds and inserts the booking entity into the database.
    pub async fn build(self) -> Result<entity::booking::Model, DbErr> {
        entity::booking::ActiveModel {
            start: ActiveValue::Set(self.start),
            end: ActiveValue::Set(self.end),
            item_id: ActiveValue::Set(self.item_id),
            booker_id: ActiveValue::Set(self.booker_id),
            status: ActiveValue::Set(self.status),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a waiting booking starting tomorrow.
pub async fn create_booking(
    db: &DatabaseConnection,
    item_id: i32,
    booker_id: i32,
) -> Result<entity::booking::Model, DbErr> {
    BookingFactory::new(db, item_id, booker_id).build().await
}

/// Creates an approved booking that ended an hour ago.
///
/// Satisfies the comment eligibility rule for `booker_id` on `item_id`.
pub async fn create_finished_booking(
    db: &DatabaseConnection,
    item_id: i32,
    booker_id: i32,
) -> Result<entity::booking::Model, DbErr> {
    let now = Utc::now();
    BookingFactory::new(db, item_id, booker_id)
        .start(now - Duration::days(1))
        .end(now - Duration::hours(1))
        .status("APPROVED")
        .build()
        .await
}
