// src/error.rs

use std::fmt;

/// Global Application Error Enum.
/// Centralizes the failures that can occur at the library boundary.
#[derive(Debug)]
pub enum AppError {
    /// A JSON payload could not be decoded into the expected record shape
    /// (e.g. a non-boolean `isCorrect` or non-numeric `responseCount`).
    BadRequest(String),

    /// A record failed the explicit field-constraint validation step.
    Validation(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::BadRequest(msg) => write!(f, "bad request: {}", msg),
            AppError::Validation(msg) => write!(f, "validation failed: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

/// Converts `serde_json::Error` into `AppError::BadRequest`.
/// Allows using the `?` operator in the decode helpers.
impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Validation(err.to_string())
    }
}
