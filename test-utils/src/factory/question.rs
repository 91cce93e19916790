//! Question factory for creating test question entities.
//!
//! Every factory-built question gets unique text by default, so tests creating several
//! questions never trip the duplicate-text check in the creation service.

use crate::factory::helpers::next_id;
use crate::fixture;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test questions with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::question::QuestionFactory;
///
/// let question = QuestionFactory::new(&db, category.id)
///     .question("Which planet is closest to the sun?")
///     .answer("Mercury")
///     .build()
///     .await?;
/// ```
pub struct QuestionFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::question::Model,
}

impl<'a> QuestionFactory<'a> {
    /// Creates a new QuestionFactory for the given category.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `category_id` - Id of the category the question belongs to
    pub fn new(db: &'a DatabaseConnection, category_id: i32) -> Self {
        let entity = fixture::question::entity_builder()
            .question(format!("Question {}", next_id()))
            .category(category_id)
            .build();

        Self { db, entity }
    }

    /// Sets the question text.
    pub fn question(mut self, question: impl Into<String>) -> Self {
        self.entity.question = question.into();
        self
    }

    /// Sets the answer text.
    pub fn answer(mut self, answer: impl Into<String>) -> Self {
        self.entity.answer = answer.into();
        self
    }

    /// Sets the difficulty rating.
    pub fn difficulty(mut self, difficulty: i32) -> Self {
        self.entity.difficulty = difficulty;
        self
    }

    /// Builds and inserts the question entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::question::Model)` - Created question entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::question::Model, DbErr> {
        entity::question::ActiveModel {
            id: ActiveValue::NotSet,
            question: ActiveValue::Set(self.entity.question),
            answer: ActiveValue::Set(self.entity.answer),
            category: ActiveValue::Set(self.entity.category),
            difficulty: ActiveValue::Set(self.entity.difficulty),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a question with default values in the given category.
///
/// Shorthand for `QuestionFactory::new(db, category_id).build().await`.
pub async fn create_question(
    db: &DatabaseConnection,
    category_id: i32,
) -> Result<entity::question::Model, DbErr> {
    QuestionFactory::new(db, category_id).build().await
}
