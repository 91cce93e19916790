//! Question domain models and parameters.

use crate::{
    model::question::{CreateQuestionDto, QuestionDto, QuestionListDto, SearchResultDto},
    server::{
        error::AppError,
        model::category::{category_names, Category},
    },
};

/// A single trivia item.
#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    pub id: i32,
    pub question: String,
    pub answer: String,
    pub category: i32,
    pub difficulty: i32,
}

impl Question {
    /// Converts an entity model at the repository boundary.
    pub fn from_entity(entity: entity::question::Model) -> Self {
        Self {
            id: entity.id,
            question: entity.question,
            answer: entity.answer,
            category: entity.category,
            difficulty: entity.difficulty,
        }
    }

    pub fn into_dto(self) -> QuestionDto {
        QuestionDto {
            id: self.id,
            question: self.question,
            answer: self.answer,
            category: self.category,
            difficulty: self.difficulty,
        }
    }
}

/// Validated input for creating a question.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateQuestionParams {
    pub question: String,
    pub answer: String,
    pub difficulty: i32,
    pub category: i32,
}

impl CreateQuestionParams {
    /// Converts the request body, rejecting blank question or answer text.
    ///
    /// # Returns
    /// - `Ok(CreateQuestionParams)` - Trimmed, non-blank parameters
    /// - `Err(AppError::Unprocessable)` - Question or answer text is blank
    pub fn from_dto(dto: CreateQuestionDto) -> Result<Self, AppError> {
        let question = dto.question.trim();
        let answer = dto.answer.trim();

        if question.is_empty() {
            return Err(AppError::Unprocessable("Question text is blank".to_string()));
        }
        if answer.is_empty() {
            return Err(AppError::Unprocessable("Answer text is blank".to_string()));
        }

        Ok(Self {
            question: question.to_string(),
            answer: answer.to_string(),
            difficulty: dto.difficulty,
            category: dto.category,
        })
    }
}

/// One page of questions with the listing context the client renders alongside it.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionPage {
    pub questions: Vec<Question>,
    /// Number of matching questions before pagination.
    pub total: u64,
    pub current_category: Option<Category>,
    pub categories: Vec<Category>,
}

impl QuestionPage {
    pub fn into_dto(self) -> QuestionListDto {
        QuestionListDto {
            success: true,
            status_code: 200,
            questions: self.questions.into_iter().map(Question::into_dto).collect(),
            total_questions: self.total,
            current_category: self.current_category.map(|c| c.kind),
            categories: category_names(self.categories),
        }
    }
}

/// One page of search matches.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    pub questions: Vec<Question>,
    /// Number of matches before pagination.
    pub total: u64,
}

impl SearchResult {
    pub fn into_dto(self) -> SearchResultDto {
        SearchResultDto {
            success: true,
            questions: self.questions.into_iter().map(Question::into_dto).collect(),
            total_questions: self.total,
            status: 200,
        }
    }
}

/// Case-insensitive substring match of `term` against the question text.
pub fn matches_term(question: &Question, term: &str) -> bool {
    question.question.to_lowercase().contains(&term.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto(question: &str, answer: &str) -> CreateQuestionDto {
        CreateQuestionDto {
            question: question.to_string(),
            answer: answer.to_string(),
            difficulty: 1,
            category: 1,
        }
    }

    #[test]
    fn trims_create_params() {
        let params = CreateQuestionParams::from_dto(dto("  Who?  ", " Me ")).unwrap();

        assert_eq!(params.question, "Who?");
        assert_eq!(params.answer, "Me");
    }

    #[test]
    fn rejects_blank_question_or_answer() {
        assert!(matches!(
            CreateQuestionParams::from_dto(dto("   ", "Me")),
            Err(AppError::Unprocessable(_))
        ));
        assert!(matches!(
            CreateQuestionParams::from_dto(dto("Who?", "")),
            Err(AppError::Unprocessable(_))
        ));
    }

    #[test]
    fn matches_term_ignoring_case() {
        let question = Question::from_entity(
            test_utils::fixture::question::entity_builder()
                .question("What is the Title of Anne Rice's first book?")
                .build(),
        );

        assert!(matches_term(&question, "title"));
        assert!(matches_term(&question, "ANNE RICE"));
        assert!(!matches_term(&question, "novel"));
    }
}
