use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        category::{CategoriesDto, CategoryQuestionsDto},
        question::PageParams,
    },
    server::{
        error::AppError,
        model::category::category_names,
        service::category::CategoryService,
        state::AppState,
        util::extract::{AppPath, AppQuery},
    },
};

/// Tag for grouping category endpoints in OpenAPI documentation
pub static CATEGORY_TAG: &str = "category";

/// List all categories.
///
/// Returns the display names of every category ordered by category id.
///
/// # Returns
/// - `200 OK` - Category names
/// - `422 Unprocessable Entity` - Database error
#[utoipa::path(
    get,
    path = "/categories",
    tag = CATEGORY_TAG,
    responses(
        (status = 200, description = "Successfully retrieved categories", body = CategoriesDto),
        (status = 422, description = "Categories could not be loaded", body = ErrorDto)
    ),
)]
pub async fn get_categories(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = CategoryService::new(&state.db);

    let categories = service.get_all().await?;

    Ok((
        StatusCode::OK,
        Json(CategoriesDto {
            success: true,
            categories: category_names(categories),
            status_code: 200,
        }),
    ))
}

/// Get a page of questions for one category.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `category_id` - Category to list questions for
/// - `params` - Optional 1-based page number
///
/// # Returns
/// - `200 OK` - Page of questions, total count, categories and the current category
/// - `404 Not Found` - Path segment is not a category id
/// - `422 Unprocessable Entity` - Category does not exist or database error
#[utoipa::path(
    get,
    path = "/categories/{category_id}/questions",
    tag = CATEGORY_TAG,
    params(
        ("category_id" = i32, Path, description = "Category id"),
        PageParams
    ),
    responses(
        (status = 200, description = "Successfully retrieved category questions", body = CategoryQuestionsDto),
        (status = 422, description = "Unknown category", body = ErrorDto)
    ),
)]
pub async fn get_category_questions(
    State(state): State<AppState>,
    AppPath(category_id): AppPath<i32>,
    AppQuery(params): AppQuery<PageParams>,
) -> Result<impl IntoResponse, AppError> {
    let service = CategoryService::new(&state.db);

    let result = service.get_questions(category_id, params.page).await?;

    Ok((StatusCode::OK, Json(result.into_dto())))
}
