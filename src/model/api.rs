use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of every error response.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub success: bool,
    pub message: String,
}

impl ErrorDto {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// Acknowledgement returned by mutations.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct StatusDto {
    pub success: bool,
    pub status: u16,
}

impl StatusDto {
    pub fn ok() -> Self {
        Self {
            success: true,
            status: 200,
        }
    }
}
