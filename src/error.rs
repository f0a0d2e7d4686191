use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    // Duplicate signups and full rosters. Reported as 400 to match the
    // public contract of the signup endpoint.
    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl AppError {
    pub fn activity_not_found() -> Self {
        AppError::NotFound("Activity not found".to_string())
    }

    pub fn already_signed_up() -> Self {
        AppError::Conflict("Student already signed up for this activity".to_string())
    }

    pub fn activity_full() -> Self {
        AppError::Conflict("Activity is full".to_string())
    }

    /// Message sent to clients in the `detail` field.
    pub fn detail(&self) -> String {
        match self {
            AppError::NotFound(msg) | AppError::Conflict(msg) | AppError::Validation(msg) => {
                msg.clone()
            }
            AppError::Configuration(_) => "Internal server error".to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::BAD_REQUEST,
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if self.status_code().is_server_error() {
            tracing::error!("{}", self);
        }

        HttpResponse::build(self.status_code()).json(ErrorResponse {
            detail: self.detail(),
        })
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::activity_not_found().status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::already_signed_up().status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AppError::activity_full().status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AppError::Validation("email is required".to_string()).status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[test]
    fn test_internal_detail_is_hidden() {
        let err = AppError::Configuration("Cannot read seed file /etc/seed.json".to_string());
        assert_eq!(err.detail(), "Internal server error");
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
