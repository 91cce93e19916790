use sea_orm::DatabaseConnection;

use crate::server::{
    data::question::QuestionRepository,
    error::AppError,
    model::{question::Question, quiz::QuizParams},
    util::quiz::select_question,
};

pub struct QuizService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> QuizService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Draws a random question the player has not been asked yet
    ///
    /// # Returns
    /// - `Ok(Some(Question))` - An unseen question from the chosen category
    /// - `Ok(None)` - Every question of the category has been asked
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn next_question(&self, params: QuizParams) -> Result<Option<Question>, AppError> {
        let candidates = QuestionRepository::new(self.db)
            .get_all(params.category)
            .await?;

        Ok(select_question(
            candidates,
            &params.previous_questions,
            |question| question.id,
            &mut rand::rng(),
        ))
    }
}
