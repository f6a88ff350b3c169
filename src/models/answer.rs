// src/models/answer.rs

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use validator::Validate;

/// One candidate answer to a survey question.
///
/// Mirrors the answer documents held by the survey store. Fields this
/// crate does not interpret (`_id`, storage timestamps, ...) are kept in
/// the flattened `extra` map and written back untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    /// The answer text as submitted by respondents.
    #[serde(default)]
    #[validate(length(max = 500))]
    pub answer: String,

    /// Whether this answer matches the expected solution.
    /// Absent in older documents, which means "not correct".
    #[serde(default)]
    pub is_correct: bool,

    /// Number of respondents that submitted this answer.
    #[serde(default)]
    #[validate(range(min = 0))]
    pub response_count: i64,

    /// 1-based position among the correct answers, 0 when unranked.
    #[serde(default)]
    #[validate(range(min = 0))]
    pub rank: i64,

    /// Reward derived from `rank`, 0 outside the scored top five.
    #[serde(default)]
    #[validate(range(min = 0, max = 100))]
    pub score: i64,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Answer {
    /// Shorthand used mostly by tests and embedders building records by hand.
    pub fn new(answer: impl Into<String>, is_correct: bool, response_count: i64) -> Self {
        Self {
            answer: answer.into(),
            is_correct,
            response_count,
            ..Self::default()
        }
    }
}
