use super::*;

/// Tests deleting an existing question.
///
/// Expected: Ok(1) with question removed
#[tokio::test]
async fn deletes_question() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_trivia_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;
    let question = factory::create_question(db, category.id).await?;
    let other = factory::create_question(db, category.id).await?;

    let repo = QuestionRepository::new(db);
    let deleted = repo.delete(question.id).await?;

    assert_eq!(deleted, 1);
    assert!(entity::prelude::Question::find_by_id(question.id)
        .one(db)
        .await?
        .is_none());
    assert!(entity::prelude::Question::find_by_id(other.id)
        .one(db)
        .await?
        .is_some());

    Ok(())
}

/// Tests deleting a question id that does not exist.
///
/// Expected: Ok(0)
#[tokio::test]
async fn deleting_unknown_question_affects_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_trivia_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = QuestionRepository::new(db);

    assert_eq!(repo.delete(100000).await?, 0);

    Ok(())
}
