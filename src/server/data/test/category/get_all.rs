use super::*;

/// Tests listing categories in id order.
///
/// Expected: Ok with categories sorted by ascending id
#[tokio::test]
async fn returns_categories_ordered_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_trivia_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::category::CategoryFactory::new(db)
        .kind("Science")
        .build()
        .await?;
    let second = factory::category::CategoryFactory::new(db)
        .kind("Art")
        .build()
        .await?;

    let repo = CategoryRepository::new(db);
    let categories = repo.get_all().await?;

    assert_eq!(categories.len(), 2);
    assert_eq!(categories[0].id, first.id);
    assert_eq!(categories[0].kind, "Science");
    assert_eq!(categories[1].id, second.id);
    assert_eq!(categories[1].kind, "Art");

    Ok(())
}

/// Tests listing categories on an empty table.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_when_no_categories() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_trivia_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CategoryRepository::new(db);
    let categories = repo.get_all().await?;

    assert!(categories.is_empty());

    Ok(())
}

/// Tests the categories seeded by the migrations.
///
/// Expected: Ok with the six default categories in id order
#[tokio::test]
async fn returns_seeded_categories() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CategoryRepository::new(db);
    let names: Vec<String> = repo.get_all().await?.into_iter().map(|c| c.kind).collect();

    assert_eq!(
        names,
        vec![
            "Science",
            "Art",
            "Geography",
            "History",
            "Entertainment",
            "Sports"
        ]
    );

    Ok(())
}
