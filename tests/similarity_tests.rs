// tests/similarity_tests.rs

use survey_analytics::config::{Config, DEFAULT_SIMILARITY_THRESHOLD};
use survey_analytics::models::{Answer, Question};
use survey_analytics::services::similarity::{
    merge_similar_answers, process_all_questions_similarity, process_question_similarity,
};

#[test]
fn exact_duplicates_merge_and_sum_counts() {
    // Arrange: same text modulo case and whitespace.
    let answers = vec![
        Answer::new("Paris", true, 10),
        Answer::new("  paris ", true, 7),
        Answer::new("Lyon", false, 3),
    ];

    // Act
    let (merged, duplicates) = merge_similar_answers(answers, DEFAULT_SIMILARITY_THRESHOLD);

    // Assert
    assert_eq!(duplicates, 1);
    assert_eq!(merged.len(), 2);
    assert_eq!(merged[0].answer, "Paris");
    assert_eq!(merged[0].response_count, 17);
    assert_eq!(merged[1].answer, "Lyon");
    assert_eq!(merged[1].response_count, 3);
}

#[test]
fn dissimilar_answers_do_not_merge() {
    let answers = vec![
        Answer::new("Paris", true, 10),
        Answer::new("London", false, 4),
    ];

    let (merged, duplicates) = merge_similar_answers(answers, DEFAULT_SIMILARITY_THRESHOLD);

    assert_eq!(duplicates, 0);
    assert_eq!(merged.len(), 2);
}

#[test]
fn correct_answer_survives_over_incorrect_duplicate() {
    // Arrange: the incorrect spelling comes first but the correct one
    // must win, bringing its rank/score and record id along.
    let mut incorrect = Answer::new("pariss", false, 5);
    incorrect
        .extra
        .insert("_id".to_string(), serde_json::json!("bad-id"));

    let mut correct = Answer::new("paris", true, 10);
    correct.rank = 1;
    correct.score = 100;
    correct
        .extra
        .insert("_id".to_string(), serde_json::json!("good-id"));

    // Act
    let (merged, duplicates) =
        merge_similar_answers(vec![incorrect, correct], DEFAULT_SIMILARITY_THRESHOLD);

    // Assert
    assert_eq!(duplicates, 1);
    assert_eq!(merged.len(), 1);
    let survivor = &merged[0];
    assert_eq!(survivor.answer, "paris");
    assert!(survivor.is_correct);
    assert_eq!(survivor.response_count, 15);
    assert_eq!((survivor.rank, survivor.score), (1, 100));
    assert_eq!(survivor.extra.get("_id"), Some(&serde_json::json!("good-id")));
}

#[test]
fn between_incorrect_duplicates_the_popular_text_survives() {
    let answers = vec![
        Answer::new("londn", false, 2),
        Answer::new("london", false, 7),
    ];

    let (merged, duplicates) = merge_similar_answers(answers, DEFAULT_SIMILARITY_THRESHOLD);

    assert_eq!(duplicates, 1);
    assert_eq!(merged.len(), 1);
    assert_eq!(merged[0].answer, "london");
    assert!(!merged[0].is_correct);
    assert_eq!(merged[0].response_count, 9);
}

#[test]
fn merge_preserves_existing_ranking_data() {
    // Arrange: already-ranked answers that do not resemble each other.
    let mut first = Answer::new("blue", true, 20);
    first.rank = 1;
    first.score = 100;
    let mut second = Answer::new("green", true, 10);
    second.rank = 2;
    second.score = 80;

    // Act
    let (merged, duplicates) =
        merge_similar_answers(vec![first, second], DEFAULT_SIMILARITY_THRESHOLD);

    // Assert: safe to run on ranked data, nothing is reset.
    assert_eq!(duplicates, 0);
    assert_eq!((merged[0].rank, merged[0].score), (1, 100));
    assert_eq!((merged[1].rank, merged[1].score), (2, 80));
}

#[test]
fn question_without_answers_passes_through() {
    let question = Question {
        question: "nothing yet".to_string(),
        ..Question::default()
    };
    let original = question.clone();

    let (processed, duplicates) =
        process_question_similarity(question, DEFAULT_SIMILARITY_THRESHOLD);

    assert_eq!(duplicates, 0);
    assert_eq!(processed, original);
}

#[test]
fn batch_summary_counts_duplicates() {
    // Arrange: threshold comes from the default configuration.
    let config = Config::default();
    let questions = vec![
        Question {
            answers: vec![
                Answer::new("yes", true, 4),
                Answer::new("YES", true, 2),
                Answer::new("no", false, 1),
            ],
            ..Question::default()
        },
        Question::default(),
    ];

    // Act
    let (processed, summary) =
        process_all_questions_similarity(questions, config.similarity_threshold);

    // Assert
    assert_eq!(processed.len(), 2);
    assert_eq!(processed[0].answers.len(), 2);
    assert_eq!(summary.total_questions, 2);
    assert_eq!(summary.processed_count, 1);
    assert_eq!(summary.skipped_count, 1);
    assert_eq!(summary.duplicates_merged, 1);
}
