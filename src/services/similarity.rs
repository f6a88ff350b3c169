// src/services/similarity.rs

use serde::Serialize;
use strsim::normalized_levenshtein;
use tracing::{debug, info};

use crate::models::{Answer, Question};

/// Totals accumulated while deduplicating a batch of questions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SimilaritySummary {
    pub total_questions: usize,
    pub processed_count: usize,
    pub skipped_count: usize,
    /// Answers folded into a surviving near-duplicate.
    pub duplicates_merged: usize,
}

/// Similarity between two answer texts in [0.0, 1.0].
///
/// Case and surrounding whitespace are ignored. Empty text never matches
/// anything. The measure is normalized Levenshtein similarity
/// (1 - edit_distance / max_length).
pub fn answer_similarity(text1: &str, text2: &str) -> f64 {
    let s1 = text1.trim().to_lowercase();
    let s2 = text2.trim().to_lowercase();

    if s1.is_empty() || s2.is_empty() {
        return 0.0;
    }
    if s1 == s2 {
        return 1.0;
    }

    normalized_levenshtein(&s1, &s2)
}

/// Merges near-duplicate answers, summing their response counts.
///
/// A single greedy pass: each answer absorbs every later answer whose
/// text similarity to it reaches `threshold`. Survivor selection:
/// * a correct answer always survives over an incorrect one, keeping the
///   better of the two rank/score pairs;
/// * between two incorrect answers, the higher original response count
///   decides which text and record id survive.
///
/// Existing rank/score values are preserved, so the pass is safe to run
/// again on already-ranked data. Returns the merged list and the number
/// of duplicates folded away.
pub fn merge_similar_answers(answers: Vec<Answer>, threshold: f64) -> (Vec<Answer>, usize) {
    if answers.is_empty() {
        return (answers, 0);
    }

    let mut merged: Vec<Answer> = Vec::with_capacity(answers.len());
    let mut processed = vec![false; answers.len()];
    let mut duplicates_merged = 0;

    for i in 0..answers.len() {
        if processed[i] {
            continue;
        }
        processed[i] = true;
        let mut current = answers[i].clone();

        for j in (i + 1)..answers.len() {
            if processed[j] {
                continue;
            }

            let similarity = answer_similarity(&answers[i].answer, &answers[j].answer);
            if similarity < threshold {
                continue;
            }

            processed[j] = true;
            duplicates_merged += 1;
            let other = &answers[j];

            debug!(
                "Merging answer '{}' into '{}' (similarity {:.3})",
                other.answer, current.answer, similarity
            );

            current.response_count += other.response_count;

            if other.is_correct && !current.is_correct {
                // Correctness takes precedence over popularity.
                current.answer = other.answer.clone();
                current.is_correct = true;
                if other.rank > current.rank {
                    current.rank = other.rank;
                    current.score = other.score;
                }
                take_record_id(&mut current, other);
            } else if !current.is_correct
                && !other.is_correct
                && other.response_count > answers[i].response_count
            {
                // Both incorrect: the more popular text survives.
                current.answer = other.answer.clone();
                take_record_id(&mut current, other);
            }
            // Both correct: first one wins, nothing else to do.
        }

        merged.push(current);
    }

    (merged, duplicates_merged)
}

fn take_record_id(current: &mut Answer, other: &Answer) {
    if let Some(id) = other.extra.get("_id") {
        current.extra.insert("_id".to_string(), id.clone());
    }
}

/// Deduplicates the answers of a single question.
/// Returns the question and the number of duplicates merged.
pub fn process_question_similarity(mut question: Question, threshold: f64) -> (Question, usize) {
    if question.answers.is_empty() {
        return (question, 0);
    }

    let (merged, duplicates_merged) =
        merge_similar_answers(std::mem::take(&mut question.answers), threshold);
    question.answers = merged;

    (question, duplicates_merged)
}

/// Deduplicates every question's answers, preserving input order.
pub fn process_all_questions_similarity(
    questions: Vec<Question>,
    threshold: f64,
) -> (Vec<Question>, SimilaritySummary) {
    let mut summary = SimilaritySummary {
        total_questions: questions.len(),
        ..SimilaritySummary::default()
    };

    let processed: Vec<Question> = questions
        .into_iter()
        .map(|question| {
            if question.answers.is_empty() {
                summary.skipped_count += 1;
                return question;
            }

            let (question, duplicates_merged) = process_question_similarity(question, threshold);
            summary.processed_count += 1;
            summary.duplicates_merged += duplicates_merged;
            question
        })
        .collect();

    info!(
        "Similarity pass complete: {} processed, {} skipped, {} duplicates merged",
        summary.processed_count, summary.skipped_count, summary.duplicates_merged
    );

    (processed, summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_similarity_identical_after_normalization() {
        assert_eq!(answer_similarity("  Paris ", "paris"), 1.0);
    }

    #[test]
    fn test_similarity_empty_never_matches() {
        assert_eq!(answer_similarity("", ""), 0.0);
        assert_eq!(answer_similarity("paris", "   "), 0.0);
    }

    #[test]
    fn test_similarity_close_texts() {
        // One substitution in five characters.
        let s = answer_similarity("paris", "parris");
        assert!(s > 0.8 && s < 1.0);
    }

    #[test]
    fn test_similarity_distant_texts() {
        assert!(answer_similarity("paris", "london") < 0.4);
    }
}
