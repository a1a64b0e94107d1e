use super::*;

/// Tests that reads attach the items listed against each request.
///
/// Expected: own listing and single read carry the linked items in id order
#[tokio::test]
async fn attaches_listed_items() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let requestor = factory::user::create_user(db).await?;
    let owner = factory::user::create_user(db).await?;
    let request = factory::item_request::create_item_request(db, requestor.id).await?;
    let empty = factory::item_request::create_item_request(db, requestor.id).await?;
    let first = factory::item::ItemFactory::new(db, owner.id)
        .request_id(request.id)
        .build()
        .await?;
    let second = factory::item::ItemFactory::new(db, owner.id)
        .request_id(request.id)
        .build()
        .await?;
    let service = ItemRequestService::new(db);

    let single = service.get_by_id(owner.id, request.id).await?;
    let own = service.get_own(requestor.id).await?;

    let item_ids: Vec<i32> = single.items.iter().map(|i| i.id).collect();
    assert_eq!(item_ids, vec![first.id, second.id]);
    assert_eq!(own.len(), 2);
    let without_items = own.iter().find(|r| r.request.id == empty.id).unwrap();
    assert!(without_items.items.is_empty());

    Ok(())
}

/// Tests the listing of other users' requests.
///
/// Expected: the caller's own requests are excluded
#[tokio::test]
async fn lists_only_other_users_requests() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let me = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;
    factory::item_request::create_item_request(db, me.id).await?;
    let theirs = factory::item_request::create_item_request(db, other.id).await?;

    let listed = ItemRequestService::new(db)
        .get_all(me.id, OffsetPage::all())
        .await?;

    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].request.id, theirs.id);

    Ok(())
}

/// Tests reading a request that does not exist.
///
/// Expected: Err(NotFound) on `requestId`
#[tokio::test]
async fn fails_for_unknown_request() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    match ItemRequestService::new(db).get_by_id(user.id, 999).await {
        Err(AppError::NotFound(err)) => assert_eq!(err.field, "requestId"),
        other => panic!("expected not found, got {:?}", other),
    }

    Ok(())
}
