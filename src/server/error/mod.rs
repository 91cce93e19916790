//! Error types and HTTP response handling.
//!
//! `AppError` is the top-level error type returned by every handler. Its `IntoResponse`
//! implementation is the single policy table mapping failures to status codes; each
//! status carries one fixed client-facing message and the underlying detail is only
//! logged.

pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::config::ConfigError};

pub const NOT_FOUND_MESSAGE: &str = "Not found";
pub const NOT_ALLOWED_MESSAGE: &str = "Not allowed";
pub const NOT_PROCESSABLE_MESSAGE: &str = "Not processable";
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup.
    ///
    /// Results in 500 Internal Server Error if it ever reaches a response.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    ///
    /// Store failures in request handlers are reported as 422 Unprocessable Entity, the
    /// open transaction having already been rolled back.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Referenced resource does not exist.
    ///
    /// Results in 404 Not Found.
    #[error("{0}")]
    NotFound(String),

    /// Request could not be processed: malformed input, an unknown category on a read,
    /// a duplicate question or an empty search result.
    ///
    /// Results in 422 Unprocessable Entity. The reason is logged at debug level.
    #[error("{0}")]
    Unprocessable(String),

    /// Route exists but not for the request method.
    ///
    /// Results in 405 Method Not Allowed.
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// Unexpected failure while drawing a quiz question.
    ///
    /// Results in 500 Internal Server Error. The message is logged but a generic message
    /// is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

impl AppError {
    /// Status code this error is reported with.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Unprocessable(_) | Self::DbErr(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::ConfigErr(_) | Self::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 404 Not Found - `NotFound`
/// - 405 Method Not Allowed - `MethodNotAllowed`
/// - 422 Unprocessable Entity - `Unprocessable` and `DbErr`
/// - 500 Internal Server Error - `InternalError` and `ConfigErr`
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let message = match &self {
            Self::NotFound(reason) => {
                tracing::debug!("Not found: {}", reason);
                NOT_FOUND_MESSAGE
            }
            Self::MethodNotAllowed => NOT_ALLOWED_MESSAGE,
            Self::Unprocessable(reason) => {
                tracing::debug!("Unprocessable request: {}", reason);
                NOT_PROCESSABLE_MESSAGE
            }
            Self::DbErr(err) => {
                tracing::error!("Database error: {}", err);
                NOT_PROCESSABLE_MESSAGE
            }
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                INTERNAL_ERROR_MESSAGE
            }
            Self::ConfigErr(err) => {
                tracing::error!("{}", err);
                INTERNAL_ERROR_MESSAGE
            }
        };

        (status, Json(ErrorDto::new(message))).into_response()
    }
}
