use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        quiz::{QuizQuestionDto, QuizRequestDto},
    },
    server::{
        error::AppError, model::quiz::QuizParams, service::quiz::QuizService, state::AppState,
        util::extract::AppJson,
    },
};

/// Tag for grouping quiz endpoints in OpenAPI documentation
pub static QUIZ_TAG: &str = "quiz";

/// Draw the next quiz question.
///
/// Picks a random question from the chosen category, or from every category when none
/// (or the "ALL" id `0`) is given, skipping the ids in `previous_questions`. Once no
/// question remains the response carries `"question": false`, which ends the quiz.
///
/// # Returns
/// - `200 OK` - The next question, or `false` when the quiz is complete
/// - `422 Unprocessable Entity` - Malformed request body
/// - `500 Internal Server Error` - Question could not be drawn
#[utoipa::path(
    post,
    path = "/quizzes",
    tag = QUIZ_TAG,
    request_body = QuizRequestDto,
    responses(
        (status = 200, description = "Next question or false", body = QuizQuestionDto),
        (status = 422, description = "Malformed request", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn play_quiz(
    State(state): State<AppState>,
    AppJson(payload): AppJson<QuizRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = QuizService::new(&state.db);

    let question = service
        .next_question(QuizParams::from_dto(payload))
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to draw quiz question: {}", e)))?;

    Ok((
        StatusCode::OK,
        Json(QuizQuestionDto {
            success: true,
            question: question.map(|q| q.into_dto()),
        }),
    ))
}
