use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::question::QuestionDto;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CategoriesDto {
    pub success: bool,
    /// Category display names ordered by category id.
    pub categories: Vec<String>,
    pub status_code: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CategoryQuestionsDto {
    pub success: bool,
    pub questions: Vec<QuestionDto>,
    pub total_questions: u64,
    pub categories: Vec<String>,
    pub current_category: String,
    pub status: u16,
}
