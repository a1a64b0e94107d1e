use super::*;

fn params(item_id: i32, start_in: Duration, end_in: Duration) -> CreateBookingParams {
    let now = Utc::now();
    CreateBookingParams {
        item_id,
        start: Some(now + start_in),
        end: Some(now + end_in),
    }
}

/// Tests that a non-owner can book an available item.
///
/// Expected: Ok with status WAITING and start before end
#[tokio::test]
async fn books_available_item_as_waiting() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, booker, item) = factory::helpers::create_item_with_booker(db).await?;

    let created = BookingService::new(db)
        .create(
            booker.id,
            params(item.id, Duration::hours(1), Duration::hours(2)),
        )
        .await?;

    assert_eq!(created.booking.status, BookingStatus::Waiting);
    assert_eq!(created.booking.booker_id, booker.id);
    assert_eq!(created.item.id, item.id);
    assert!(created.booking.start < created.booking.end);

    Ok(())
}

/// Tests that an owner cannot book their own item.
///
/// Expected: Err(AccessDenied)
#[tokio::test]
async fn denies_owner_booking_own_item() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, _booker, item) = factory::helpers::create_item_with_booker(db).await?;

    let result = BookingService::new(db)
        .create(
            owner.id,
            params(item.id, Duration::hours(1), Duration::hours(2)),
        )
        .await;

    assert!(matches!(result, Err(AppError::AccessDenied(_))));

    Ok(())
}

/// Tests the date range rules.
///
/// Expected: Err(Validation) for start after end, start equal to end, past start,
/// past end and missing dates
#[tokio::test]
async fn rejects_invalid_date_ranges() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, booker, item) = factory::helpers::create_item_with_booker(db).await?;
    let service = BookingService::new(db);

    let cases = [
        params(item.id, Duration::hours(2), Duration::hours(1)),
        params(item.id, Duration::hours(1), Duration::hours(1)),
        params(item.id, -Duration::hours(1), Duration::hours(1)),
        params(item.id, -Duration::hours(2), -Duration::hours(1)),
        CreateBookingParams {
            item_id: item.id,
            start: None,
            end: None,
        },
    ];

    for case in cases {
        let result = service.create(booker.id, case.clone()).await;
        assert!(
            matches!(result, Err(AppError::Validation(_))),
            "expected validation error for {:?}",
            case
        );
    }

    let stored = entity::prelude::Booking::find().all(db).await?;
    assert!(stored.is_empty());

    Ok(())
}

/// Tests that missing dates are reported on both fields at once.
///
/// Expected: Err(Validation) naming `start` and `end`
#[tokio::test]
async fn reports_all_date_failures_together() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, booker, item) = factory::helpers::create_item_with_booker(db).await?;

    let result = BookingService::new(db)
        .create(
            booker.id,
            CreateBookingParams {
                item_id: item.id,
                start: None,
                end: None,
            },
        )
        .await;

    match result {
        Err(AppError::Validation(errors)) => {
            assert!(errors.contains("start"));
            assert!(errors.contains("end"));
        }
        other => panic!("expected validation error, got {:?}", other.map(|b| b.booking)),
    }

    Ok(())
}

/// Tests booking an unavailable item.
///
/// Expected: Err(Validation)
#[tokio::test]
async fn rejects_unavailable_item() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let booker = factory::user::create_user(db).await?;
    let item = factory::item::ItemFactory::new(db, owner.id)
        .available(false)
        .build()
        .await?;

    let result = BookingService::new(db)
        .create(
            booker.id,
            params(item.id, Duration::hours(1), Duration::hours(2)),
        )
        .await;

    assert!(matches!(result, Err(AppError::Validation(_))));

    Ok(())
}

/// Tests booking with an unknown booker or item.
///
/// Expected: Err(NotFound) in both cases
#[tokio::test]
async fn fails_for_unknown_booker_or_item() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, booker, item) = factory::helpers::create_item_with_booker(db).await?;
    let service = BookingService::new(db);

    let unknown_booker = service
        .create(999, params(item.id, Duration::hours(1), Duration::hours(2)))
        .await;
    let unknown_item = service
        .create(booker.id, params(999, Duration::hours(1), Duration::hours(2)))
        .await;

    assert!(matches!(unknown_booker, Err(AppError::NotFound(_))));
    assert!(matches!(unknown_item, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests that a range intersecting a waiting booking is refused.
///
/// Expected: Err(Validation) for the overlap, Ok for an adjacent range
#[tokio::test]
async fn rejects_overlapping_booking() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, booker, item) = factory::helpers::create_item_with_booker(db).await?;
    let other = factory::user::create_user(db).await?;
    let service = BookingService::new(db);

    let first = service
        .create(
            booker.id,
            params(item.id, Duration::hours(1), Duration::hours(3)),
        )
        .await?;

    let overlapping = service
        .create(
            other.id,
            params(item.id, Duration::hours(2), Duration::hours(4)),
        )
        .await;
    assert!(matches!(overlapping, Err(AppError::Validation(_))));

    let adjacent = service
        .create(
            other.id,
            CreateBookingParams {
                item_id: item.id,
                start: Some(first.booking.end),
                end: Some(first.booking.end + Duration::hours(1)),
            },
        )
        .await;
    assert!(adjacent.is_ok());

    Ok(())
}
