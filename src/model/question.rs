use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct QuestionDto {
    pub id: i32,
    pub question: String,
    pub answer: String,
    pub category: i32,
    pub difficulty: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreateQuestionDto {
    pub question: String,
    pub answer: String,
    pub difficulty: i32,
    pub category: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SearchQuestionsDto {
    #[serde(rename = "searchTerm", default)]
    pub search_term: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageParams {
    /// 1-based page number, values below 1 select the first page.
    pub page: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct QuestionListParams {
    /// Restricts the listing to one category id.
    pub category: Option<i32>,
    /// 1-based page number, values below 1 select the first page.
    pub page: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct QuestionListDto {
    pub success: bool,
    pub status_code: u16,
    pub questions: Vec<QuestionDto>,
    pub total_questions: u64,
    pub current_category: Option<String>,
    pub categories: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SearchResultDto {
    pub success: bool,
    pub questions: Vec<QuestionDto>,
    pub total_questions: u64,
    pub status: u16,
}
