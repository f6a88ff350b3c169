// src/models/question.rs

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use validator::Validate;

use super::answer::Answer;
use crate::error::AppError;

/// A survey question together with the answers collected for it.
///
/// Field names follow the wire format of the survey store (camelCase).
/// Unknown fields are preserved in `extra` and round-trip unmodified.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    /// The question text.
    #[serde(default)]
    #[validate(length(max = 1000))]
    pub question: String,

    /// Question type: 'Input' (free text) or 'MCQ' (multiple choice).
    #[serde(default)]
    pub question_type: String,

    #[serde(default)]
    pub question_category: String,

    #[serde(default)]
    pub question_level: String,

    #[serde(default)]
    #[validate(range(min = 0))]
    pub times_skipped: i64,

    #[serde(default)]
    #[validate(range(min = 0))]
    pub times_answered: i64,

    /// Collected answers. A question that has not been answered yet may
    /// lack this field entirely; decoding turns that into an empty list
    /// and serialization omits the empty list again.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[validate(nested)]
    pub answers: Vec<Answer>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Question {
    /// Identifier used in log output: the stored `_id` when present,
    /// otherwise a snippet of the question text.
    pub fn label(&self) -> String {
        self.extra
            .get("_id")
            .and_then(|v| v.as_str())
            .map(str::to_owned)
            .unwrap_or_else(|| self.question.chars().take(30).collect())
    }

    /// Number of answers flagged correct.
    pub fn correct_answer_count(&self) -> usize {
        self.answers.iter().filter(|a| a.is_correct).count()
    }

    /// Checks field constraints before a record is handed back to storage.
    pub fn validate_for_update(&self) -> Result<(), AppError> {
        Validate::validate(self)?;
        Ok(())
    }
}
