use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::question::{matches_term, CreateQuestionParams, Question};

pub struct QuestionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> QuestionRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets all questions ordered by id, optionally restricted to one category
    pub async fn get_all(&self, category: Option<i32>) -> Result<Vec<Question>, DbErr> {
        let mut query =
            entity::prelude::Question::find().order_by_asc(entity::question::Column::Id);

        if let Some(category_id) = category {
            query = query.filter(entity::question::Column::Category.eq(category_id));
        }

        let questions = query.all(self.db).await?;

        Ok(questions.into_iter().map(Question::from_entity).collect())
    }

    /// Gets a question by id
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Question>, DbErr> {
        let question = entity::prelude::Question::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(question.map(Question::from_entity))
    }

    /// Finds a question whose text is exactly `text`
    pub async fn find_by_question(&self, text: &str) -> Result<Option<Question>, DbErr> {
        let question = entity::prelude::Question::find()
            .filter(entity::question::Column::Question.eq(text))
            .one(self.db)
            .await?;

        Ok(question.map(Question::from_entity))
    }

    /// Gets questions whose text contains `term`, ignoring case, ordered by id
    ///
    /// Matching happens after the fetch so case folding covers non-ASCII text regardless
    /// of the database's LIKE collation. Each search loads the whole `questions` table;
    /// SQLite's `LIKE` and `LOWER` only fold ASCII, so pushing this into SQL changes results.
    pub async fn search(&self, term: &str) -> Result<Vec<Question>, DbErr> {
        let questions = self.get_all(None).await?;

        Ok(questions
            .into_iter()
            .filter(|question| matches_term(question, term))
            .collect())
    }

    /// Inserts a new question and returns it with its assigned id
    pub async fn create(&self, params: CreateQuestionParams) -> Result<Question, DbErr> {
        let question = entity::question::ActiveModel {
            question: ActiveValue::Set(params.question),
            answer: ActiveValue::Set(params.answer),
            category: ActiveValue::Set(params.category),
            difficulty: ActiveValue::Set(params.difficulty),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Question::from_entity(question))
    }

    /// Deletes a question, returning the number of rows removed
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Question::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
