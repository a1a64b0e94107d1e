//! Shared helper utilities for factory methods.
//!
//! Provides unique value generation and shortcuts for creating entities together
//! with the rows they depend on.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates an owner, an available item owned by them, and a second user who can book it.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((owner, booker, item))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_item_with_booker(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::user::Model,
        entity::item::Model,
    ),
    DbErr,
> {
    let owner = crate::factory::user::create_user(db).await?;
    let booker = crate::factory::user::create_user(db).await?;
    let item = crate::factory::item::create_item(db, owner.id).await?;

    Ok((owner, booker, item))
}

/// Creates an item with a booker and one booking in the given status and time range.
///
/// # Arguments
/// - `db` - Database connection
/// - `status` - Stored booking status (`WAITING`, `APPROVED`, ...)
/// - `start` - Booking start
/// - `end` - Booking end
///
/// # Returns
/// - `Ok((owner, booker, item, booking))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_booking_with_dependencies(
    db: &DatabaseConnection,
    status: &str,
    start: chrono::DateTime<chrono::Utc>,
    end: chrono::DateTime<chrono::Utc>,
) -> Result<
    (
        entity::user::Model,
        entity::user::Model,
        entity::item::Model,
        entity::booking::Model,
    ),
    DbErr,
> {
    let (owner, booker, item) = create_item_with_booker(db).await?;
    let booking = crate::factory::booking::BookingFactory::new(db, item.id, booker.id)
        .status(status)
        .start(start)
        .end(end)
        .build()
        .await?;

    Ok((owner, booker, item, booking))
}
