use super::*;

/// Tests creating a user.
///
/// Expected: Ok with the stored name and email and a fresh id
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create("Alice".to_string(), "alice@example.com".to_string())
        .await?;

    assert_eq!(user.name, "Alice");
    assert_eq!(user.email, "alice@example.com");
    assert!(repo.exists(user.id).await?);

    Ok(())
}

/// Tests that the email column is unique.
///
/// Expected: Err with a unique constraint violation
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .email("taken@example.com")
        .build()
        .await?;

    let result = UserRepository::new(db)
        .create("Bob".to_string(), "taken@example.com".to_string())
        .await;

    assert!(matches!(
        result.as_ref().map_err(|e| e.sql_err()),
        Err(Some(sea_orm::SqlErr::UniqueConstraintViolation(_)))
    ));

    Ok(())
}
