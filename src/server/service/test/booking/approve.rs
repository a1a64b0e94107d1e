use super::*;

/// Tests approving and rejecting waiting bookings.
///
/// Expected: APPROVED for `true`, REJECTED for `false`
#[tokio::test]
async fn decides_waiting_booking() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, booker, item) = factory::helpers::create_item_with_booker(db).await?;
    let first = factory::booking::create_booking(db, item.id, booker.id).await?;
    let second = factory::booking::create_booking(db, item.id, booker.id).await?;
    let service = BookingService::new(db);

    let approved = service.approve(owner.id, first.id, true).await?;
    let rejected = service.approve(owner.id, second.id, false).await?;

    assert_eq!(approved.booking.status, BookingStatus::Approved);
    assert_eq!(rejected.booking.status, BookingStatus::Rejected);

    Ok(())
}

/// Tests that a decision can only be made once.
///
/// Expected: second call fails with Validation and the status stays APPROVED
#[tokio::test]
async fn rejects_second_decision() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, booker, item) = factory::helpers::create_item_with_booker(db).await?;
    let booking = factory::booking::create_booking(db, item.id, booker.id).await?;
    let service = BookingService::new(db);

    service.approve(owner.id, booking.id, true).await?;
    let second = service.approve(owner.id, booking.id, false).await;

    assert!(matches!(second, Err(AppError::Validation(_))));
    let stored = service.get(owner.id, booking.id).await?;
    assert_eq!(stored.booking.status, BookingStatus::Approved);

    Ok(())
}

/// Tests that only the item owner can decide.
///
/// Expected: Err(AccessDenied) for the booker, Err(NotFound) for an unknown booking
#[tokio::test]
async fn denies_non_owner_and_unknown_booking() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, booker, item) = factory::helpers::create_item_with_booker(db).await?;
    let booking = factory::booking::create_booking(db, item.id, booker.id).await?;
    let service = BookingService::new(db);

    let by_booker = service.approve(booker.id, booking.id, true).await;
    let unknown = service.approve(owner.id, 999, true).await;

    assert!(matches!(by_booker, Err(AppError::AccessDenied(_))));
    assert!(matches!(unknown, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests two concurrent decisions on the same waiting booking.
///
/// Expected: exactly one succeeds, the other fails with Validation, and the
/// stored status matches the winner
#[tokio::test]
async fn only_one_concurrent_decision_wins() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, booker, item) = factory::helpers::create_item_with_booker(db).await?;
    let booking = factory::booking::create_booking(db, item.id, booker.id).await?;

    let approve = BookingService::new(db);
    let reject = BookingService::new(db);
    let (approved, rejected) = tokio::join!(
        approve.approve(owner.id, booking.id, true),
        reject.approve(owner.id, booking.id, false),
    );

    let winner = match (approved, rejected) {
        (Ok(won), Err(AppError::Validation(_))) => won,
        (Err(AppError::Validation(_)), Ok(won)) => won,
        (a, b) => panic!(
            "expected exactly one decision to succeed, got {:?} and {:?}",
            a.map(|b| b.booking.status),
            b.map(|b| b.booking.status)
        ),
    };

    let stored = entity::prelude::Booking::find_by_id(booking.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.status, winner.booking.status.as_str());

    Ok(())
}
