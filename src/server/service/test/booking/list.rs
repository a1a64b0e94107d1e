use super::*;
use crate::server::model::booking::BookingWithItem;

fn ids(list: &[BookingWithItem]) -> Vec<i32> {
    list.iter().map(|b| b.booking.id).collect()
}

/// Tests booker and owner listings.
///
/// Expected: both sides see the same booking, newest start first, filtered by state
#[tokio::test]
async fn lists_for_booker_and_owner() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let (owner, booker, item) = factory::helpers::create_item_with_booker(db).await?;
    let past = factory::booking::create_finished_booking(db, item.id, booker.id).await?;
    let future = factory::booking::BookingFactory::new(db, item.id, booker.id)
        .start(now + Duration::days(3))
        .end(now + Duration::days(4))
        .build()
        .await?;
    let service = BookingService::new(db);

    let by_booker = service
        .get_by_booker(booker.id, BookingState::All, OffsetPage::all())
        .await?;
    let by_owner = service
        .get_by_owner(owner.id, BookingState::All, OffsetPage::all())
        .await?;
    let owner_past = service
        .get_by_owner(owner.id, BookingState::Past, OffsetPage::all())
        .await?;

    assert_eq!(ids(&by_booker), vec![future.id, past.id]);
    assert_eq!(ids(&by_owner), vec![future.id, past.id]);
    assert_eq!(ids(&owner_past), vec![past.id]);

    Ok(())
}

/// Tests listings for a user that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn fails_for_unknown_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = BookingService::new(db)
        .get_by_booker(999, BookingState::All, OffsetPage::all())
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
