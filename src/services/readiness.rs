// src/services/readiness.rs

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::config::MIN_CORRECT_FOR_FINAL;
use crate::models::Question;

/// Why a question cannot go to the final collection yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotReady {
    /// Only Input questions are published; MCQ and anything else stay out.
    NotInputType(String),
    NoAnswers,
    /// Fewer correct answers with a rank and score than the required minimum.
    TooFewCorrect(usize),
}

impl fmt::Display for NotReady {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotReady::NotInputType(t) => {
                write!(f, "{} question - only Input questions go to final", t)
            }
            NotReady::NoAnswers => write!(f, "question has no answers"),
            NotReady::TooFewCorrect(n) => write!(
                f,
                "needs at least {} ranked correct answers, found {}",
                MIN_CORRECT_FOR_FINAL, n
            ),
        }
    }
}

/// Per-question-type readiness statistics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TypeStats {
    pub total: usize,
    pub ready: usize,
    pub needs_more: usize,
}

/// Batch readiness overview, totals plus a per-type breakdown keyed by
/// the stored `questionType` spelling.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReadinessSummary {
    pub total_questions: usize,
    pub total_input_questions: usize,
    pub total_mcq_questions: usize,
    pub ready_for_final: usize,
    /// Input questions with some, but too few, ranked correct answers.
    pub needs_more_answers: usize,
    pub non_eligible_questions: usize,
    pub by_type: HashMap<String, TypeStats>,
}

/// Checks whether a ranked question is ready for final publication.
///
/// Ready means: Input type (case-insensitive), has answers, and at least
/// [`MIN_CORRECT_FOR_FINAL`] answers that are correct with `rank > 0`
/// and `score > 0`. Requiring a rank guards against publishing data the
/// ranking pass never touched.
pub fn final_readiness(question: &Question) -> Result<(), NotReady> {
    if !question.question_type.eq_ignore_ascii_case("input") {
        return Err(NotReady::NotInputType(question.question_type.clone()));
    }

    if question.answers.is_empty() {
        return Err(NotReady::NoAnswers);
    }

    let valid_correct = ranked_correct_count(question);
    if valid_correct < MIN_CORRECT_FOR_FINAL {
        debug!(
            "Question {} needs more correct answers for final: has {}, needs {}",
            question.label(),
            valid_correct,
            MIN_CORRECT_FOR_FINAL
        );
        return Err(NotReady::TooFewCorrect(valid_correct));
    }

    Ok(())
}

fn ranked_correct_count(question: &Question) -> usize {
    question
        .answers
        .iter()
        .filter(|a| a.is_correct && a.rank > 0 && a.score > 0)
        .count()
}

/// Copy of the question holding only its correct answers, as handed to
/// the publication layer.
pub fn filter_answers_for_final(question: &Question) -> Question {
    let mut filtered = question.clone();
    filtered.answers.retain(|a| a.is_correct);
    filtered
}

/// Summarizes final readiness across a batch of ranked questions.
pub fn final_submission_summary(questions: &[Question]) -> ReadinessSummary {
    let mut summary = ReadinessSummary {
        total_questions: questions.len(),
        ..ReadinessSummary::default()
    };

    for question in questions {
        let stats = summary
            .by_type
            .entry(question.question_type.clone())
            .or_default();
        stats.total += 1;

        if question.question_type.eq_ignore_ascii_case("input") {
            summary.total_input_questions += 1;

            match final_readiness(question) {
                Ok(()) => {
                    summary.ready_for_final += 1;
                    stats.ready += 1;
                }
                Err(NotReady::TooFewCorrect(n)) if n > 0 => {
                    summary.needs_more_answers += 1;
                    stats.needs_more += 1;
                }
                Err(_) => {}
            }
        } else if question.question_type.eq_ignore_ascii_case("mcq") {
            summary.total_mcq_questions += 1;
            summary.non_eligible_questions += 1;
        } else {
            summary.non_eligible_questions += 1;
        }
    }

    summary
}
