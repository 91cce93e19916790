use super::*;

/// Tests resolving an existing category.
///
/// Expected: Ok(Some) with matching category
#[tokio::test]
async fn returns_existing_category() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_trivia_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_category(db).await?;

    let repo = CategoryRepository::new(db);
    let category = repo.get_by_id(created.id).await?.unwrap();

    assert_eq!(category.id, created.id);
    assert_eq!(category.kind, created.kind);

    Ok(())
}

/// Tests resolving a category id that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_category() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_trivia_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CategoryRepository::new(db);

    assert!(repo.get_by_id(100000).await?.is_none());

    Ok(())
}
