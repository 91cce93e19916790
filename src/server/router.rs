use axum::{
    http::{
        header::{ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, AUTHORIZATION, CONTENT_TYPE},
        HeaderValue, Method,
    },
    routing::{delete, get, post},
    Json, Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;

use crate::server::{
    controller::{
        category::{get_categories, get_category_questions},
        fallback::{method_not_allowed, not_found},
        question::{create_question, delete_question, get_questions, search_questions},
        quiz::play_quiz,
    },
    state::AppState,
};

const ALLOWED_HEADERS: &str = "Content-Type,Authorization,true";
const ALLOWED_METHODS: &str = "GET,PATCH,POST,DELETE,OPTIONS";

#[derive(OpenApi)]
#[openapi(
    info(title = "Trivia API", description = "Question bank and quiz play"),
    paths(
        crate::server::controller::category::get_categories,
        crate::server::controller::category::get_category_questions,
        crate::server::controller::question::get_questions,
        crate::server::controller::question::create_question,
        crate::server::controller::question::delete_question,
        crate::server::controller::question::search_questions,
        crate::server::controller::quiz::play_quiz,
    ),
    tags(
        (name = "category", description = "Category listing"),
        (name = "question", description = "Question management and search"),
        (name = "quiz", description = "Quiz play")
    )
)]
pub struct ApiDoc;

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Routes of the API without middleware; state is supplied by [`app`].
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/categories", get(get_categories))
        .route("/categories/{category_id}/questions", get(get_category_questions))
        .route("/questions", get(get_questions).post(create_question))
        .route("/questions/search", post(search_questions))
        .route("/questions/{question_id}", delete(delete_question))
        .route("/quizzes", post(play_quiz))
        .route("/api-docs/openapi.json", get(openapi))
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
}

/// Builds the complete application: routes, state, CORS handling and request tracing.
///
/// Every response, errors included, carries the fixed `Access-Control-Allow-Headers`
/// and `Access-Control-Allow-Methods` values. Preflight requests from any origin are
/// answered by the CORS layer.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::PATCH,
            Method::POST,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION]);

    router()
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOWED_HEADERS),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(ALLOWED_METHODS),
        ))
}
