use super::*;

/// Tests that only supplied fields change.
///
/// Expected: availability flips, name and description are kept
#[tokio::test]
async fn applies_only_supplied_fields() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let item = factory::item::create_item(db, owner.id).await?;

    let updated = ItemService::new(db)
        .update(
            owner.id,
            item.id,
            UpdateItemParams {
                available: Some(false),
                ..Default::default()
            },
        )
        .await?;

    assert!(!updated.available);
    assert_eq!(updated.name, item.name);
    assert_eq!(updated.description, item.description);

    Ok(())
}

/// Tests updates by a non-owner and on a missing item.
///
/// Expected: Err(AccessDenied) and Err(NotFound)
#[tokio::test]
async fn denies_non_owner_and_unknown_item() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, other, item) = factory::helpers::create_item_with_booker(db).await?;
    let service = ItemService::new(db);
    let rename = || UpdateItemParams {
        name: Some("Stolen".to_string()),
        ..Default::default()
    };

    assert!(matches!(
        service.update(other.id, item.id, rename()).await,
        Err(AppError::AccessDenied(_))
    ));
    assert!(matches!(
        service.update(other.id, 999, rename()).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}

/// Tests that a supplied blank name is refused.
///
/// Expected: Err(Validation)
#[tokio::test]
async fn rejects_blank_name() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let item = factory::item::create_item(db, owner.id).await?;

    let result = ItemService::new(db)
        .update(
            owner.id,
            item.id,
            UpdateItemParams {
                name: Some(" ".to_string()),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::Validation(_))));

    Ok(())
}
