use super::*;

fn params(category: i32) -> CreateQuestionParams {
    CreateQuestionParams {
        question: "Where in the world is Carmen Sandiego?".to_string(),
        answer: "California".to_string(),
        difficulty: 1,
        category,
    }
}

/// Tests inserting a question.
///
/// Expected: Ok with assigned id and stored fields
#[tokio::test]
async fn creates_question() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_trivia_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;

    let repo = QuestionRepository::new(db);
    let created = repo.create(params(category.id)).await?;

    assert!(created.id > 0);

    let stored = entity::prelude::Question::find_by_id(created.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.question, "Where in the world is Carmen Sandiego?");
    assert_eq!(stored.answer, "California");
    assert_eq!(stored.difficulty, 1);
    assert_eq!(stored.category, category.id);

    Ok(())
}

/// Tests that an insert inside a transaction that is never committed is discarded.
///
/// Expected: Ok with no question persisted
#[tokio::test]
async fn uncommitted_insert_is_rolled_back() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_trivia_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_category(db).await?;

    {
        let txn = db.begin().await?;
        QuestionRepository::new(&txn).create(params(category.id)).await?;
        txn.rollback().await?;
    }

    let count = entity::prelude::Question::find().all(db).await?.len();
    assert_eq!(count, 0);

    Ok(())
}
