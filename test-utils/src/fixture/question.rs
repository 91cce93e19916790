//! Question fixtures for creating in-memory test data.
//!
//! Provides question entity models without database insertion. Useful for unit testing
//! pure helpers such as pagination and quiz selection, and as factory defaults.

use entity::question;

/// Default test question text.
pub const DEFAULT_QUESTION: &str = "What is the heaviest organ in the human body?";

/// Default test answer.
pub const DEFAULT_ANSWER: &str = "The Liver";

/// Default category id for questions.
pub const DEFAULT_CATEGORY: i32 = 1;

/// Default difficulty rating.
pub const DEFAULT_DIFFICULTY: i32 = 4;

/// Creates a question entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - question: `"What is the heaviest organ in the human body?"`
/// - answer: `"The Liver"`
/// - category: `1`
/// - difficulty: `4`
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::fixture;
///
/// let question = fixture::question::entity();
/// assert_eq!(question.answer, "The Liver");
/// ```
pub fn entity() -> question::Model {
    question::Model {
        id: 1,
        question: DEFAULT_QUESTION.to_string(),
        answer: DEFAULT_ANSWER.to_string(),
        category: DEFAULT_CATEGORY,
        difficulty: DEFAULT_DIFFICULTY,
    }
}

/// Creates a question entity builder for customizing fixture values.
pub fn entity_builder() -> QuestionEntityBuilder {
    QuestionEntityBuilder { entity: entity() }
}

/// Builder for question entity fixtures.
pub struct QuestionEntityBuilder {
    entity: question::Model,
}

impl QuestionEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.entity.id = id;
        self
    }

    pub fn question(mut self, question: impl Into<String>) -> Self {
        self.entity.question = question.into();
        self
    }

    pub fn answer(mut self, answer: impl Into<String>) -> Self {
        self.entity.answer = answer.into();
        self
    }

    pub fn category(mut self, category: i32) -> Self {
        self.entity.category = category;
        self
    }

    pub fn difficulty(mut self, difficulty: i32) -> Self {
        self.entity.difficulty = difficulty;
        self
    }

    pub fn build(self) -> question::Model {
        self.entity
    }
}
