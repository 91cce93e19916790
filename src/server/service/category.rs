use sea_orm::DatabaseConnection;

use crate::server::{
    data::{category::CategoryRepository, question::QuestionRepository},
    error::AppError,
    model::category::{Category, CategoryQuestions},
    util::pagination::paginate,
};

pub struct CategoryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CategoryService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all categories ordered by id
    pub async fn get_all(&self) -> Result<Vec<Category>, AppError> {
        let repo = CategoryRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Gets one page of a category's questions along with the full category list
    ///
    /// # Arguments
    /// - `category_id` - Category to list questions for
    /// - `page` - Requested 1-based page
    ///
    /// # Returns
    /// - `Ok(CategoryQuestions)` - Page of questions, total count and categories
    /// - `Err(AppError::Unprocessable)` - Category does not exist
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn get_questions(
        &self,
        category_id: i32,
        page: Option<i64>,
    ) -> Result<CategoryQuestions, AppError> {
        let category_repo = CategoryRepository::new(self.db);

        let category = category_repo.get_by_id(category_id).await?.ok_or_else(|| {
            AppError::Unprocessable(format!("Category {} does not exist", category_id))
        })?;

        let questions = QuestionRepository::new(self.db)
            .get_all(Some(category.id))
            .await?;
        let categories = category_repo.get_all().await?;

        let total = questions.len() as u64;

        Ok(CategoryQuestions {
            category,
            questions: paginate(page, questions),
            total,
            categories,
        })
    }
}
