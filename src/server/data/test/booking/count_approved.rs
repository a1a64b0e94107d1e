use super::*;

/// Tests counting approved bookings with and without an end cutoff.
///
/// Expected: the unfinished approval counts only without a cutoff; waiting
/// bookings never count
#[tokio::test]
async fn counts_approved_bookings() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let (_owner, booker, item) = factory::helpers::create_item_with_booker(db).await?;
    factory::booking::create_finished_booking(db, item.id, booker.id).await?;
    factory::booking::BookingFactory::new(db, item.id, booker.id)
        .status("APPROVED")
        .build()
        .await?;
    factory::booking::create_booking(db, item.id, booker.id).await?;

    let repo = BookingRepository::new(db);

    assert_eq!(repo.count_approved(item.id, booker.id, None).await?, 2);
    assert_eq!(repo.count_approved(item.id, booker.id, Some(now)).await?, 1);

    Ok(())
}
