use super::*;

/// Tests posting a request.
///
/// Expected: Ok with no items attached
#[tokio::test]
async fn posts_request() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let requestor = factory::user::create_user(db).await?;

    let created = ItemRequestService::new(db)
        .create(
            requestor.id,
            CreateItemRequestParams {
                description: Some("Need a ladder for the weekend".to_string()),
            },
        )
        .await?;

    assert_eq!(created.request.requestor_id, requestor.id);
    assert!(created.items.is_empty());

    Ok(())
}

/// Tests description rules and unknown requestors.
///
/// Expected: Err(Validation) for blank and overlong text, Err(NotFound) for an
/// unknown requestor
#[tokio::test]
async fn rejects_invalid_requests() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let requestor = factory::user::create_user(db).await?;
    let service = ItemRequestService::new(db);
    let with = |text: String| CreateItemRequestParams {
        description: Some(text),
    };

    assert!(matches!(
        service.create(requestor.id, with(" ".to_string())).await,
        Err(AppError::Validation(_))
    ));
    assert!(matches!(
        service.create(requestor.id, with("x".repeat(256))).await,
        Err(AppError::Validation(_))
    ));
    assert!(matches!(
        service.create(999, with("Ladder".to_string())).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}
