use super::*;

/// Tests booking visibility.
///
/// Expected: booker and owner can read; another user is denied
#[tokio::test]
async fn visible_only_to_participants() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, booker, item) = factory::helpers::create_item_with_booker(db).await?;
    let stranger = factory::user::create_user(db).await?;
    let booking = factory::booking::create_booking(db, item.id, booker.id).await?;
    let service = BookingService::new(db);

    assert_eq!(service.get(booker.id, booking.id).await?.booking.id, booking.id);
    assert_eq!(service.get(owner.id, booking.id).await?.item.id, item.id);
    assert!(matches!(
        service.get(stranger.id, booking.id).await,
        Err(AppError::AccessDenied(_))
    ));
    assert!(matches!(
        service.get(booker.id, 999).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}
