use super::*;

/// Tests fetching items listed against a set of requests.
///
/// Expected: Ok with only items linked to the given requests
#[tokio::test]
async fn finds_items_linked_to_requests() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let requestor = factory::user::create_user(db).await?;
    let owner = factory::user::create_user(db).await?;
    let request = factory::item_request::create_item_request(db, requestor.id).await?;
    let linked = factory::item::ItemFactory::new(db, owner.id)
        .request_id(request.id)
        .build()
        .await?;
    factory::item::create_item(db, owner.id).await?;

    let repo = ItemRepository::new(db);
    let items = repo.find_by_requests(&[request.id]).await?;

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, linked.id);
    assert_eq!(items[0].request_id, Some(request.id));
    assert!(repo.find_by_requests(&[]).await?.is_empty());

    Ok(())
}
