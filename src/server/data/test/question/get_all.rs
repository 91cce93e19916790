use super::*;

/// Tests listing every question across categories.
///
/// Expected: Ok with all questions ordered by id
#[tokio::test]
async fn returns_all_questions_ordered_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_trivia_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let science = factory::create_category(db).await?;
    let art = factory::create_category(db).await?;
    let first = factory::create_question(db, art.id).await?;
    let second = factory::create_question(db, science.id).await?;
    let third = factory::create_question(db, art.id).await?;

    let repo = QuestionRepository::new(db);
    let ids: Vec<i32> = repo.get_all(None).await?.into_iter().map(|q| q.id).collect();

    assert_eq!(ids, vec![first.id, second.id, third.id]);

    Ok(())
}

/// Tests listing questions filtered by category.
///
/// Expected: Ok with only the category's questions
#[tokio::test]
async fn filters_questions_by_category() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_trivia_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let science = factory::create_category(db).await?;
    let art = factory::create_category(db).await?;
    factory::create_question(db, science.id).await?;
    let painting = factory::create_question(db, art.id).await?;

    let repo = QuestionRepository::new(db);
    let questions = repo.get_all(Some(art.id)).await?;

    assert_eq!(questions.len(), 1);
    assert_eq!(questions[0].id, painting.id);
    assert_eq!(questions[0].category, art.id);

    Ok(())
}

/// Tests looking up questions by id and by exact text.
///
/// Expected: Ok(Some) for existing rows, Ok(None) otherwise
#[tokio::test]
async fn finds_question_by_id_and_text() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_trivia_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;
    let created = factory::create_question(db, category.id).await?;

    let repo = QuestionRepository::new(db);

    assert_eq!(repo.get_by_id(created.id).await?.unwrap().question, created.question);
    assert!(repo.get_by_id(created.id + 1).await?.is_none());

    assert_eq!(
        repo.find_by_question(&created.question).await?.unwrap().id,
        created.id
    );
    assert!(repo.find_by_question("Not a stored question").await?.is_none());

    Ok(())
}
