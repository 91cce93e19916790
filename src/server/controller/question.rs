use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ErrorDto, StatusDto},
        question::{
            CreateQuestionDto, PageParams, QuestionListDto, QuestionListParams,
            SearchQuestionsDto, SearchResultDto,
        },
    },
    server::{
        error::AppError,
        model::question::CreateQuestionParams,
        service::question::QuestionService,
        state::AppState,
        util::extract::{AppJson, AppPath, AppQuery},
    },
};

/// Tag for grouping question endpoints in OpenAPI documentation
pub static QUESTION_TAG: &str = "question";

/// Get a page of questions.
///
/// Lists questions ordered by id, ten per page, optionally restricted to one category.
/// The response also carries the total number of matching questions, the category list
/// and the current category name.
///
/// # Returns
/// - `200 OK` - Page of questions
/// - `404 Not Found` - No categories or no questions to list
/// - `422 Unprocessable Entity` - Unknown category, malformed query or database error
#[utoipa::path(
    get,
    path = "/questions",
    tag = QUESTION_TAG,
    params(QuestionListParams),
    responses(
        (status = 200, description = "Successfully retrieved questions", body = QuestionListDto),
        (status = 404, description = "No questions to list", body = ErrorDto),
        (status = 422, description = "Unknown category or malformed query", body = ErrorDto)
    ),
)]
pub async fn get_questions(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<QuestionListParams>,
) -> Result<impl IntoResponse, AppError> {
    let service = QuestionService::new(&state.db);

    let page = service.get_page(params.category, params.page).await?;

    Ok((StatusCode::OK, Json(page.into_dto())))
}

/// Create a new question.
///
/// # Returns
/// - `200 OK` - Question created
/// - `422 Unprocessable Entity` - Missing or blank fields, duplicate question text or
///   database error
#[utoipa::path(
    post,
    path = "/questions",
    tag = QUESTION_TAG,
    request_body = CreateQuestionDto,
    responses(
        (status = 200, description = "Successfully created question", body = StatusDto),
        (status = 422, description = "Invalid or duplicate question", body = ErrorDto)
    ),
)]
pub async fn create_question(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateQuestionDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateQuestionParams::from_dto(payload)?;

    let service = QuestionService::new(&state.db);

    service.create(params).await?;

    Ok((StatusCode::OK, Json(StatusDto::ok())))
}

/// Delete a question.
///
/// # Returns
/// - `200 OK` - Question deleted
/// - `404 Not Found` - No question with this id
/// - `422 Unprocessable Entity` - Database error
#[utoipa::path(
    delete,
    path = "/questions/{question_id}",
    tag = QUESTION_TAG,
    params(
        ("question_id" = i32, Path, description = "Question id")
    ),
    responses(
        (status = 200, description = "Successfully deleted question", body = StatusDto),
        (status = 404, description = "Question not found", body = ErrorDto),
        (status = 422, description = "Question could not be deleted", body = ErrorDto)
    ),
)]
pub async fn delete_question(
    State(state): State<AppState>,
    AppPath(question_id): AppPath<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = QuestionService::new(&state.db);

    service.delete(question_id).await?;

    Ok((StatusCode::OK, Json(StatusDto::ok())))
}

/// Search questions by text.
///
/// Matches the search term as a case-insensitive substring of the question text.
///
/// # Returns
/// - `200 OK` - Page of matches and total match count
/// - `422 Unprocessable Entity` - Missing or blank term, no matches or database error
#[utoipa::path(
    post,
    path = "/questions/search",
    tag = QUESTION_TAG,
    params(PageParams),
    request_body = SearchQuestionsDto,
    responses(
        (status = 200, description = "Matching questions", body = SearchResultDto),
        (status = 422, description = "Blank term or no matches", body = ErrorDto)
    ),
)]
pub async fn search_questions(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<PageParams>,
    AppJson(payload): AppJson<SearchQuestionsDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = QuestionService::new(&state.db);

    let result = service
        .search(payload.search_term.as_deref(), params.page)
        .await?;

    Ok((StatusCode::OK, Json(result.into_dto())))
}
