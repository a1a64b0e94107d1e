use super::*;

/// Tests that owner listings only include the owner's items, ascending by id.
///
/// Expected: Ok with the owner's two items in insertion order
#[tokio::test]
async fn lists_only_owned_items_in_id_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let stranger = factory::user::create_user(db).await?;
    let first = factory::item::create_item(db, owner.id).await?;
    factory::item::create_item(db, stranger.id).await?;
    let second = factory::item::create_item(db, owner.id).await?;

    let items = ItemRepository::new(db)
        .find_by_owner(owner.id, OffsetPage::all())
        .await?;

    let ids: Vec<i32> = items.iter().map(|item| item.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}

/// Tests that consecutive pages partition the owner's items.
///
/// Expected: pages (0, 2), (2, 2), (4, 2) together hold every item exactly once
#[tokio::test]
async fn pages_partition_owned_items() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let mut expected = Vec::new();
    for _ in 0..5 {
        expected.push(factory::item::create_item(db, owner.id).await?.id);
    }

    let repo = ItemRepository::new(db);
    let mut seen = Vec::new();
    for from in [0, 2, 4] {
        let page = OffsetPage::new(Some(from), Some(2)).unwrap();
        let items = repo.find_by_owner(owner.id, page).await?;
        assert!(items.len() <= 2);
        seen.extend(items.into_iter().map(|item| item.id));
    }

    assert_eq!(seen, expected);

    Ok(())
}

/// Tests an offset without a page size against the database.
///
/// Expected: Ok with every owned item after the offset
#[tokio::test]
async fn offset_without_size_returns_remaining_items() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    factory::item::create_item(db, owner.id).await?;
    let second = factory::item::create_item(db, owner.id).await?;
    let third = factory::item::create_item(db, owner.id).await?;

    let page = OffsetPage::new(Some(1), None).unwrap();
    let items = ItemRepository::new(db).find_by_owner(owner.id, page).await?;

    let ids: Vec<i32> = items.iter().map(|item| item.id).collect();
    assert_eq!(ids, vec![second.id, third.id]);

    Ok(())
}
