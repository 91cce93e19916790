//! Handlers for requests that match no route.

use crate::server::error::AppError;

/// Answers requests for paths no route serves.
pub async fn not_found() -> AppError {
    AppError::NotFound("No route for request".to_string())
}

/// Answers requests whose path exists but not for the request method.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
