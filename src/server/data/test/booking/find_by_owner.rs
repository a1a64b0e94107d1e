use super::*;

/// Tests that owner listings cover every owned item and nothing else.
///
/// Expected: Ok with bookings of both owned items, none of the stranger's item
#[tokio::test]
async fn lists_bookings_on_owned_items() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let booker = factory::user::create_user(db).await?;
    let stranger = factory::user::create_user(db).await?;
    let first = factory::item::create_item(db, owner.id).await?;
    let second = factory::item::create_item(db, owner.id).await?;
    let foreign = factory::item::create_item(db, stranger.id).await?;

    let a = factory::booking::create_booking(db, first.id, booker.id).await?;
    let b = factory::booking::BookingFactory::new(db, second.id, booker.id)
        .start(Utc::now() + Duration::days(5))
        .end(Utc::now() + Duration::days(6))
        .build()
        .await?;
    factory::booking::create_booking(db, foreign.id, booker.id).await?;

    let rows = BookingRepository::new(db)
        .find_by_owner(owner.id, BookingState::All, Utc::now(), OffsetPage::all())
        .await?;

    let ids: Vec<i32> = rows.iter().map(|(booking, _)| booking.id).collect();
    assert_eq!(ids, vec![b.id, a.id]);

    Ok(())
}

/// Tests offset paging over owner bookings.
///
/// Expected: second page of size 1 holds the second-newest booking
#[tokio::test]
async fn pages_owner_bookings() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let (owner, booker, item) = factory::helpers::create_item_with_booker(db).await?;
    let mut ids = Vec::new();
    for day in 1..=3 {
        let booking = factory::booking::BookingFactory::new(db, item.id, booker.id)
            .start(now + Duration::days(day * 2))
            .end(now + Duration::days(day * 2 + 1))
            .build()
            .await?;
        ids.push(booking.id);
    }

    let rows = BookingRepository::new(db)
        .find_by_owner(
            owner.id,
            BookingState::All,
            now,
            OffsetPage::new(Some(1), Some(1)).unwrap(),
        )
        .await?;

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].0.id, ids[1]);

    Ok(())
}
