// src/models/mod.rs

pub mod answer;
pub mod question;

pub use answer::Answer;
pub use question::Question;

use crate::error::AppError;
use serde_json::Value;

/// Decodes a JSON array of question documents into typed records.
///
/// Mistyped fields are rejected rather than coerced: a non-boolean
/// `isCorrect` or non-numeric `responseCount` surfaces as
/// [`AppError::BadRequest`]. Missing optional fields are filled with
/// their defaults.
pub fn decode_questions(value: Value) -> Result<Vec<Question>, AppError> {
    let questions = serde_json::from_value(value)?;
    Ok(questions)
}

/// Decodes a single question document. Same typing rules as
/// [`decode_questions`].
pub fn decode_question(value: Value) -> Result<Question, AppError> {
    let question = serde_json::from_value(value)?;
    Ok(question)
}
