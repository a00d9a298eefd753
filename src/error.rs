//! Application error types

use serde::Serialize;
use thiserror::Error;

/// Application-wide error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Storage error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Backtest engine error: {0}")]
    Engine(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Stable machine-readable code shown at the front-end boundary
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Database(_) => "STORAGE_ERROR",
            AppError::Serialization(_) => "SERIALIZATION_ERROR",
            AppError::Io(_) => "IO_ERROR",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::Engine(_) => "BACKTEST_FAILED",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

/// Error as rendered to the user: a code plus a readable message
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl From<AppError> for ErrorResponse {
    fn from(err: AppError) -> Self {
        ErrorResponse {
            code: err.code().to_string(),
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_carries_code_and_message() {
        let err = AppError::Validation("Strategy description must not be empty".to_string());
        let response = ErrorResponse::from(err);

        assert_eq!(response.code, "VALIDATION_ERROR");
        assert_eq!(
            response.message,
            "Validation error: Strategy description must not be empty"
        );
    }

    #[test]
    fn test_engine_errors_map_to_backtest_failed() {
        let err = AppError::Engine("Backtest failed. Please try again.".to_string());
        assert_eq!(err.code(), "BACKTEST_FAILED");
    }
}
