use super::*;

/// Tests case-insensitive substring search over question text.
///
/// Expected: Ok with only matching questions in id order
#[tokio::test]
async fn matches_substring_ignoring_case() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_trivia_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;
    let first = factory::question::QuestionFactory::new(db, category.id)
        .question("What movie earned Tom Hanks his third straight Oscar nomination?")
        .build()
        .await?;
    factory::question::QuestionFactory::new(db, category.id)
        .question("Which country won the first ever soccer World Cup?")
        .build()
        .await?;
    let second = factory::question::QuestionFactory::new(db, category.id)
        .question("Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?")
        .build()
        .await?;

    let repo = QuestionRepository::new(db);
    let ids: Vec<i32> = repo
        .search("TITLE")
        .await?
        .into_iter()
        .map(|q| q.id)
        .collect();

    assert_eq!(ids, vec![second.id]);

    let ids: Vec<i32> = repo.search("wh").await?.into_iter().map(|q| q.id).collect();
    assert_eq!(ids.len(), 3);
    assert!(ids.contains(&first.id));

    Ok(())
}

/// Tests searching for a term no question contains.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_without_matches() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_trivia_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;
    factory::create_question(db, category.id).await?;

    let repo = QuestionRepository::new(db);

    assert!(repo.search("xylophone").await?.is_empty());

    Ok(())
}
