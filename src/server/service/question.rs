use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{category::CategoryRepository, question::QuestionRepository},
    error::AppError,
    model::question::{CreateQuestionParams, Question, QuestionPage, SearchResult},
    util::pagination::paginate,
};

pub struct QuestionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> QuestionService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets one page of questions, optionally restricted to a category
    ///
    /// # Arguments
    /// - `category` - Category id to filter by, all questions when `None`
    /// - `page` - Requested 1-based page
    ///
    /// # Returns
    /// - `Ok(QuestionPage)` - Page of questions with total count and category context
    /// - `Err(AppError::Unprocessable)` - The requested category does not exist
    /// - `Err(AppError::NotFound)` - There are no categories or no matching questions
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn get_page(
        &self,
        category: Option<i32>,
        page: Option<i64>,
    ) -> Result<QuestionPage, AppError> {
        let category_repo = CategoryRepository::new(self.db);

        let current_category = match category {
            Some(id) => Some(category_repo.get_by_id(id).await?.ok_or_else(|| {
                AppError::Unprocessable(format!("Category {} does not exist", id))
            })?),
            None => None,
        };

        let questions = QuestionRepository::new(self.db).get_all(category).await?;
        let categories = category_repo.get_all().await?;

        if categories.is_empty() || questions.is_empty() {
            return Err(AppError::NotFound("No questions to list".to_string()));
        }

        let total = questions.len() as u64;

        Ok(QuestionPage {
            questions: paginate(page, questions),
            total,
            current_category,
            categories,
        })
    }

    /// Creates a question unless one with identical text already exists
    ///
    /// The duplicate check and the insert share one transaction. Two concurrent requests
    /// with the same text can still both pass the check; no extra locking is applied.
    ///
    /// # Returns
    /// - `Ok(Question)` - The created question
    /// - `Err(AppError::Unprocessable)` - Unknown category or a question with the same text exists
    /// - `Err(AppError::DbErr)` - Database error, including constraint violations
    pub async fn create(&self, params: CreateQuestionParams) -> Result<Question, AppError> {
        let txn = self.db.begin().await?;
        let repo = QuestionRepository::new(&txn);

        if CategoryRepository::new(&txn)
            .get_by_id(params.category)
            .await?
            .is_none()
        {
            return Err(AppError::Unprocessable(format!(
                "Category {} does not exist",
                params.category
            )));
        }

        if let Some(existing) = repo.find_by_question(&params.question).await? {
            return Err(AppError::Unprocessable(format!(
                "Question duplicates question {}",
                existing.id
            )));
        }

        let question = repo.create(params).await?;

        txn.commit().await?;

        tracing::info!("Created question {}", question.id);

        Ok(question)
    }

    /// Deletes a question by id
    ///
    /// # Returns
    /// - `Ok(())` - Question deleted
    /// - `Err(AppError::NotFound)` - No question with this id
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;
        let repo = QuestionRepository::new(&txn);

        let question = repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Question {} does not exist", id)))?;

        repo.delete(question.id).await?;

        txn.commit().await?;

        tracing::info!("Deleted question {}", id);

        Ok(())
    }

    /// Gets one page of questions whose text contains the search term, ignoring case
    ///
    /// # Returns
    /// - `Ok(SearchResult)` - Page of matches and total match count
    /// - `Err(AppError::Unprocessable)` - Term missing or blank, or nothing matched
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn search(
        &self,
        term: Option<&str>,
        page: Option<i64>,
    ) -> Result<SearchResult, AppError> {
        // Trimming only decides blankness; matching uses the term as sent.
        let term = term
            .filter(|term| !term.trim().is_empty())
            .ok_or_else(|| AppError::Unprocessable("Search term is required".to_string()))?;

        let matches = QuestionRepository::new(self.db).search(term).await?;

        if matches.is_empty() {
            return Err(AppError::Unprocessable(format!(
                "No questions match '{}'",
                term
            )));
        }

        let total = matches.len() as u64;

        Ok(SearchResult {
            questions: paginate(page, matches),
            total,
        })
    }
}
