use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Errors surfaced to the client.
///
/// Bodies are fixed plain-text strings; details stay in the logs.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {}", .0.join(", "))]
    Validation(Vec<String>),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Missing configuration: {}", .0.join(", "))]
    Configuration(Vec<&'static str>),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn public_message(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "Invalid input",
            AppError::BadRequest(_) => "Invalid request body",
            AppError::Configuration(_) => "Server configuration error",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::BadRequest(ref msg) = self {
            tracing::debug!("Rejected request body: {}", msg);
        }

        (self.status(), self.public_message()).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
