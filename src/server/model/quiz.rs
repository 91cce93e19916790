//! Quiz round parameters.

use std::collections::HashSet;

use crate::model::quiz::QuizRequestDto;

/// Category id the client sends for its "ALL" choice.
pub const ALL_CATEGORIES_ID: i32 = 0;

/// Input for drawing the next quiz question.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuizParams {
    /// Category to draw from; `None` draws from every question.
    pub category: Option<i32>,
    /// Ids of questions already shown in this quiz.
    pub previous_questions: HashSet<i32>,
}

impl QuizParams {
    pub fn from_dto(dto: QuizRequestDto) -> Self {
        let category = dto
            .quiz_category
            .and_then(|c| c.id)
            .filter(|id| *id != ALL_CATEGORIES_ID);

        Self {
            category,
            previous_questions: dto.previous_questions.into_iter().collect(),
        }
    }
}
