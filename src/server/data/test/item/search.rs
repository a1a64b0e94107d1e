use super::*;

/// Tests that search matches name or description regardless of case.
///
/// Expected: Ok with both matching items
#[tokio::test]
async fn matches_name_or_description_case_insensitively() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let by_name = factory::item::ItemFactory::new(db, owner.id)
        .name("Power Drill")
        .description("Cordless")
        .build()
        .await?;
    let by_description = factory::item::ItemFactory::new(db, owner.id)
        .name("Toolbox")
        .description("Comes with a DRILL bit set")
        .build()
        .await?;
    factory::item::ItemFactory::new(db, owner.id)
        .name("Ladder")
        .description("Aluminium")
        .build()
        .await?;

    let items = ItemRepository::new(db)
        .search("drill", OffsetPage::all())
        .await?;

    let ids: Vec<i32> = items.iter().map(|item| item.id).collect();
    assert_eq!(ids, vec![by_name.id, by_description.id]);

    Ok(())
}

/// Tests that unavailable items never appear in search results.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn excludes_unavailable_items() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    factory::item::ItemFactory::new(db, owner.id)
        .name("Drill")
        .available(false)
        .build()
        .await?;

    let items = ItemRepository::new(db)
        .search("drill", OffsetPage::all())
        .await?;

    assert!(items.is_empty());

    Ok(())
}

/// Tests that case folding covers non-ASCII letters.
///
/// Expected: Ok with the item whichever case the query uses
#[tokio::test]
async fn matches_cyrillic_regardless_of_case() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let drill = factory::item::ItemFactory::new(db, owner.id)
        .name("Дрель")
        .description("Аккумуляторная")
        .build()
        .await?;

    let repo = ItemRepository::new(db);
    for query in ["Дрель", "дрель", "ДРЕЛЬ", "аккумулятор"] {
        let items = repo.search(query, OffsetPage::all()).await?;
        let ids: Vec<i32> = items.iter().map(|item| item.id).collect();
        assert_eq!(ids, vec![drill.id], "query {:?}", query);
    }

    Ok(())
}

/// Tests that `%` and `_` are matched as literal characters.
///
/// Expected: Ok with only the item containing the character
#[tokio::test]
async fn treats_like_wildcards_literally() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    factory::item::ItemFactory::new(db, owner.id)
        .name("Ladder")
        .description("Aluminium")
        .build()
        .await?;
    let cotton = factory::item::ItemFactory::new(db, owner.id)
        .name("Tent")
        .description("100% cotton")
        .build()
        .await?;

    let repo = ItemRepository::new(db);

    let percent = repo.search("%", OffsetPage::all()).await?;
    let ids: Vec<i32> = percent.iter().map(|item| item.id).collect();
    assert_eq!(ids, vec![cotton.id]);

    let underscore = repo.search("_", OffsetPage::all()).await?;
    assert!(underscore.is_empty());

    Ok(())
}

/// Tests paging applied to search hits.
///
/// Expected: Ok with the hits after the offset, unavailable and non-matching items
/// never counted
#[tokio::test]
async fn pages_over_matching_items_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let mut hits = Vec::new();
    for _ in 0..3 {
        factory::item::ItemFactory::new(db, owner.id)
            .name("Ladder")
            .build()
            .await?;
        hits.push(
            factory::item::ItemFactory::new(db, owner.id)
                .name("Saw")
                .build()
                .await?
                .id,
        );
    }

    let page = OffsetPage::new(Some(1), Some(1)).unwrap();
    let items = ItemRepository::new(db).search("saw", page).await?;

    let ids: Vec<i32> = items.iter().map(|item| item.id).collect();
    assert_eq!(ids, vec![hits[1]]);

    Ok(())
}
