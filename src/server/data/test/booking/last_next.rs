use super::*;

/// Tests last/next lookups around a reference instant.
///
/// Expected: last ended before `as_of`, next starts after it, and rejected
/// bookings are skipped
#[tokio::test]
async fn finds_last_and_next_around_instant() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let (_owner, booker, item) = factory::helpers::create_item_with_booker(db).await?;
    let older = factory::booking::BookingFactory::new(db, item.id, booker.id)
        .start(now - Duration::days(5))
        .end(now - Duration::days(4))
        .status("APPROVED")
        .build()
        .await?;
    let last = factory::booking::BookingFactory::new(db, item.id, booker.id)
        .start(now - Duration::days(3))
        .end(now - Duration::days(2))
        .status("APPROVED")
        .build()
        .await?;
    factory::booking::BookingFactory::new(db, item.id, booker.id)
        .start(now - Duration::days(2))
        .end(now - Duration::days(1))
        .status("REJECTED")
        .build()
        .await?;
    let next = factory::booking::BookingFactory::new(db, item.id, booker.id)
        .start(now + Duration::days(1))
        .end(now + Duration::days(2))
        .build()
        .await?;
    factory::booking::BookingFactory::new(db, item.id, booker.id)
        .start(now + Duration::days(3))
        .end(now + Duration::days(4))
        .build()
        .await?;

    let repo = BookingRepository::new(db);
    let found_last = repo.last_before(item.id, now).await?.unwrap();
    let found_next = repo.next_after(item.id, now).await?.unwrap();

    assert_eq!(found_last.id, last.id);
    assert_ne!(found_last.id, older.id);
    assert!(found_last.end < now);
    assert_eq!(found_next.id, next.id);
    assert!(found_next.start > now);

    Ok(())
}

/// Tests that a booking spanning the instant is neither last nor next.
///
/// Expected: both lookups return None
#[tokio::test]
async fn ignores_booking_spanning_instant() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let (_owner, _booker, item, _booking) = factory::helpers::create_booking_with_dependencies(
        db,
        "APPROVED",
        now - Duration::hours(1),
        now + Duration::hours(1),
    )
    .await?;

    let repo = BookingRepository::new(db);

    assert!(repo.last_before(item.id, now).await?.is_none());
    assert!(repo.next_after(item.id, now).await?.is_none());

    Ok(())
}
