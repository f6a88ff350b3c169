// src/services/ranking.rs

use std::cmp::Reverse;

use serde::Serialize;
use tracing::{debug, info};

use crate::config::SCORING_VALUES;
use crate::models::{Answer, Question};

/// Totals accumulated while ranking a batch of questions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RankingSummary {
    pub total_questions: usize,
    /// Questions whose answer list was ranked.
    pub processed_count: usize,
    /// Questions skipped because they carry no answers.
    pub skipped_count: usize,
    /// Answers that received a rank assignment.
    pub answers_ranked: usize,
    /// Answers that received a non-zero score.
    pub answers_scored: usize,
}

/// Ranks all correct answers by response count and scores the top five.
///
/// Correct answers are stable-sorted by descending `response_count`, get
/// `rank = position + 1`, and a score from [`SCORING_VALUES`] (0 past the
/// table). Incorrect answers are set to rank 0 / score 0 and moved after
/// the ranked block, keeping their relative order.
pub fn rank_and_score_answers(answers: Vec<Answer>) -> Vec<Answer> {
    rank_answers(answers).0
}

fn rank_answers(answers: Vec<Answer>) -> (Vec<Answer>, usize, usize) {
    if answers.is_empty() {
        return (answers, 0, 0);
    }

    debug!("Processing {} answers for ranking", answers.len());

    let (mut correct, mut incorrect): (Vec<Answer>, Vec<Answer>) =
        answers.into_iter().partition(|a| a.is_correct);

    debug!(
        "Found {} correct answers, {} incorrect answers",
        correct.len(),
        incorrect.len()
    );

    // Stable sort: equal response counts keep their submission order.
    correct.sort_by_key(|a| Reverse(a.response_count));

    let mut answers_ranked = 0;
    let mut answers_scored = 0;

    for (i, answer) in correct.iter_mut().enumerate() {
        answer.rank = (i + 1) as i64;
        answer.score = SCORING_VALUES.get(i).copied().unwrap_or(0);

        answers_ranked += 1;
        if answer.score > 0 {
            answers_scored += 1;
        }

        debug!(
            "Ranked answer '{}' - rank: {}, score: {}, responseCount: {}",
            snippet(&answer.answer),
            answer.rank,
            answer.score,
            answer.response_count
        );
    }

    for answer in &mut incorrect {
        answer.rank = 0;
        answer.score = 0;
        debug!(
            "Set incorrect answer '{}' to rank=0, score=0",
            snippet(&answer.answer)
        );
    }

    // Correct answers first (ranked), then incorrect answers.
    correct.append(&mut incorrect);
    (correct, answers_ranked, answers_scored)
}

/// Applies answer ranking to a single question.
/// Questions without answers pass through unchanged.
pub fn process_question_ranking(question: Question) -> Question {
    process_question(question).0
}

fn process_question(mut question: Question) -> (Question, usize, usize) {
    if question.answers.is_empty() {
        debug!("Skipping question {} - no answers", question.label());
        return (question, 0, 0);
    }

    debug!(
        "Processing ranking for question {} with {} answers",
        question.label(),
        question.answers.len()
    );

    let (ranked, answers_ranked, answers_scored) =
        rank_answers(std::mem::take(&mut question.answers));
    question.answers = ranked;

    (question, answers_ranked, answers_scored)
}

/// Applies answer ranking to every question, preserving input order.
pub fn process_all_questions_ranking(questions: Vec<Question>) -> Vec<Question> {
    questions.into_iter().map(process_question_ranking).collect()
}

/// Batch variant that also reports processing totals.
pub fn process_all_questions_with_summary(
    questions: Vec<Question>,
) -> (Vec<Question>, RankingSummary) {
    let mut summary = RankingSummary {
        total_questions: questions.len(),
        ..RankingSummary::default()
    };

    let processed: Vec<Question> = questions
        .into_iter()
        .map(|question| {
            let had_answers = !question.answers.is_empty();
            let (question, answers_ranked, answers_scored) = process_question(question);

            if had_answers {
                summary.processed_count += 1;
            } else {
                summary.skipped_count += 1;
            }
            summary.answers_ranked += answers_ranked;
            summary.answers_scored += answers_scored;

            question
        })
        .collect();

    info!(
        "Ranking complete: {} processed, {} skipped, {} answers ranked, {} answers scored",
        summary.processed_count,
        summary.skipped_count,
        summary.answers_ranked,
        summary.answers_scored
    );

    (processed, summary)
}

fn snippet(text: &str) -> String {
    text.chars().take(30).collect()
}
